//! # Runtime Settings
//!
//! Deployment settings read from the process environment. Every value has a
//! default except the optional log and telemetry destinations; malformed values
//! are rejected up front rather than discovered on the first request.
//!
//! | Variable                      | Default          |
//! |-------------------------------|------------------|
//! | `CHATBOT_VARIANT`             | `company`        |
//! | `COMPANY_URL`                 | variant base URL |
//! | `LOCAL_TESTING`               | `false`          |
//! | `LOCAL_DATA_DIR`              | `./local_data`   |
//! | `BIND_ADDR`                   | `0.0.0.0:8000`   |
//! | `FETCH_TIMEOUT_SECS`          | `10`             |
//! | `LOG_DIR`                     | unset            |
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | unset            |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::crawler::CrawlerConfig;
use crate::topics::as_directory;
use crate::variants::{Variant, VariantConfig};

pub const DEFAULT_LOCAL_DATA_DIR: &str = "./local_data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    InvalidVariant { var: &'static str, message: String },

    #[error("{var}: invalid URL '{value}': {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[error("{var}: '{value}' has no host")]
    MissingHost { var: &'static str, value: String },

    #[error("{var}: invalid socket address '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("{var}: expected a whole number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Fully validated deployment settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub variant: Variant,
    /// Crawl root, fetch root and the page used for messages naming no topic
    pub base_url: Url,
    pub local_testing: bool,
    pub local_data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub fetch_timeout: Duration,
    pub log_dir: Option<PathBuf>,
    pub otlp_endpoint: Option<String>,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which returns the raw value of a variable.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let variant = match get("CHATBOT_VARIANT") {
            Some(raw) => raw.parse::<Variant>().map_err(|message| ConfigError::InvalidVariant {
                var: "CHATBOT_VARIANT",
                message,
            })?,
            None => Variant::default(),
        };

        let base_url = match get("COMPANY_URL") {
            Some(raw) => parse_site_url("COMPANY_URL", &raw)?,
            None => parse_site_url("COMPANY_URL", variant.default_base_url())?,
        };

        let local_testing = get("LOCAL_TESTING")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let local_data_dir = get("LOCAL_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCAL_DATA_DIR));

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse_bind_addr("BIND_ADDR", &bind_raw)?;

        let fetch_timeout = match get("FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: "FETCH_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        Ok(Self {
            variant,
            base_url,
            local_testing,
            local_data_dir,
            bind_addr,
            fetch_timeout,
            log_dir: get("LOG_DIR").map(PathBuf::from),
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// Switch to another variant.
    ///
    /// The base URL follows the variant unless it was overridden explicitly.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        if self.base_url.as_str() == self.variant.default_base_url() {
            if let Ok(url) = Url::parse(variant.default_base_url()) {
                self.base_url = url;
            }
        }
        self.variant = variant;
        self
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = as_directory(base_url);
        self
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// The variant's data laid out around the effective base URL
    pub fn variant_config(&self) -> VariantConfig {
        self.variant.config(self.base_url.clone())
    }

    pub fn crawler_config(&self) -> CrawlerConfig {
        CrawlerConfig::builder().timeout(self.fetch_timeout).build()
    }
}

/// Parse an absolute http(s) URL with a host; the path always ends in `/`
pub fn parse_site_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        var,
        value: raw.to_string(),
        source,
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost {
            var,
            value: raw.to_string(),
        });
    }
    Ok(as_directory(url))
}

pub fn parse_bind_addr(var: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|source| ConfigError::InvalidAddr {
        var,
        value: raw.to_string(),
        source,
    })
}
