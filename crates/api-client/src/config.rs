//! Client configuration.

/// Fallback when no base URL is configured at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the external ETL status API. Resolved from the
/// `ETL_API_BASE_URL` compile-time environment variable, falling back to the
/// local development backend.
pub fn base_url() -> String {
    option_env!("ETL_API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }
}
