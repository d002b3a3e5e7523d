pub mod api_utils;
pub mod date_utils;
pub mod debounce;
pub mod list_utils;
pub mod notify;
