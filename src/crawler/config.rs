//! # Crawler Configuration Module
//!
//! Controls how pages are fetched and how crawled links are folded into the
//! topic map. Built with a builder, like the rest of the crate's configs.

use std::time::Duration;

/// Which link wins when several links on a page classify to the same topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPreference {
    /// Later links overwrite earlier ones
    #[default]
    Last,
    /// The first link seen is kept
    First,
}

/// Configuration for page fetching and link discovery
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Per-request timeout
    pub timeout: Duration,

    /// User agent to use for requests
    pub user_agent: String,

    /// Tie-break for links sharing a topic
    pub link_preference: LinkPreference,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("deskbot/{}", env!("CARGO_PKG_VERSION")),
            link_preference: LinkPreference::default(),
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CrawlerConfig::default(),
        }
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the tie-break for links sharing a topic
    pub fn link_preference(mut self, preference: LinkPreference) -> Self {
        self.config.link_preference = preference;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::new()
    }
}
