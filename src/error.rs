//! Error types for the deskbot crate

use thiserror::Error;

use crate::config::ConfigError;
use crate::crawler::FetchError;

/// Result type for deskbot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for deskbot operations
///
/// Request handling never surfaces these to chat users; they appear at startup
/// (bad configuration, unbuildable HTTP client) and in operator commands.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Page could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_site_url;

    fn site(raw: &str) -> Result<url::Url> {
        Ok(parse_site_url("COMPANY_URL", raw)?)
    }

    #[test]
    fn test_config_error_converts() {
        let err = site("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidUrl { .. })));
        assert!(err.to_string().starts_with("Configuration error:"));
        assert_eq!(site("http://localhost:8080/site").unwrap().path(), "/site/");
    }
}
