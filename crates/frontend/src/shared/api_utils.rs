//! API utilities for talking to the remote orders resource
//!
//! Provides the base URL for requests and a one-time override hook
//! for pointing the client at a different endpoint (staging, tests).

use once_cell::sync::OnceCell;

/// Default endpoint of the hosted orders collection
const DEFAULT_API_BASE: &str = "https://671b710f2c842d92c37fedc8.mockapi.io/api/v1";

static API_BASE: OnceCell<String> = OnceCell::new();

/// Override the base URL for API requests.
///
/// Must be called before the first request is issued; the override
/// can be installed only once.
pub fn set_api_base(base: &str) -> Result<(), String> {
    API_BASE
        .set(base.trim_end_matches('/').to_string())
        .map_err(|_| "API base is already configured".to_string())
}

/// Get the base URL for API requests (no trailing slash)
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_base;
/// let url = format!("{}/orders/123", api_base());
/// ```
pub fn api_base() -> String {
    match API_BASE.get() {
        Some(base) => base.clone(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Единственный тест, трогающий глобальный API_BASE: проверки
    // идут последовательно, потому что OnceCell выставляется один раз
    #[test]
    fn test_api_base_override() {
        assert_eq!(api_base(), DEFAULT_API_BASE);
        assert_eq!(api_url("/orders"), format!("{}/orders", DEFAULT_API_BASE));

        set_api_base("http://localhost:4010/api/v1/").unwrap();
        assert_eq!(api_base(), "http://localhost:4010/api/v1");

        assert!(set_api_base("http://elsewhere").is_err());
        assert_eq!(api_base(), "http://localhost:4010/api/v1");
    }
}
