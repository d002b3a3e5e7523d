/// Utilities for date parsing and formatting
///
/// Provides consistent date handling across the application
use chrono::NaiveDate;

/// Parse the calendar date out of an ISO-8601 string.
/// Accepts both bare dates ("2024-03-15") and date-times
/// ("2024-03-15T14:02:26.123Z"); the time and offset parts are ignored.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}
