//! API utilities for talking to the contributors service
//!
//! The service lives on a fixed remote host.

/// Host serving `GET /{org}`
pub const DEFAULT_API_BASE: &str = "https://gocontributor.herokuapp.com";

/// Get the base URL for API requests
pub fn api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("https://"));
    }
}
