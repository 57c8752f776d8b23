//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a price with two decimals, e.g. "$10.99"
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.99), "$10.99");
        assert_eq!(format_price(9.99 + 50.0), "$59.99");
        assert_eq!(format_price(3.0), "$3.00");
    }

    #[test]
    fn test_data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
