//! Error types for the crawler module

use std::path::PathBuf;

use thiserror::Error;

/// Error type for page fetches
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client error, including timeouts and non-success statuses
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fixture file missing in local mode
    #[error("Local file not found: {}", .0.display())]
    LocalMissing(PathBuf),

    /// Fixture file present but unreadable
    #[error("Local read error: {0}")]
    LocalIo(#[from] std::io::Error),
}

impl FetchError {
    /// Text shown to a chat user in place of page content
    pub fn apology(&self) -> String {
        match self {
            FetchError::Http(e) => format!(
                "Unable to fetch company information at this time. Please try again later or contact support. (Error: {})",
                e
            ),
            FetchError::LocalMissing(path) => format!(
                "Local file not found: {}. Please create local test files for testing.",
                path.display()
            ),
            FetchError::LocalIo(e) => format!("Error reading local content: {}", e),
        }
    }
}

/// Error type for site crawls
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Base page could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Base URL cannot carry links (e.g. `data:` URLs)
    #[error("Base URL has no host: {0}")]
    NoHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_apologies() {
        let missing = FetchError::LocalMissing(PathBuf::from("/tmp/fixtures/about.html"));
        assert_eq!(
            missing.apology(),
            "Local file not found: /tmp/fixtures/about.html. Please create local test files for testing."
        );

        let io = FetchError::LocalIo(std::io::Error::other("boom"));
        assert_eq!(io.apology(), "Error reading local content: boom");
    }
}
