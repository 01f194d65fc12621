//! Upstream coaster API configuration.

use std::env;
use thiserror::Error;
use url::Url;

/// Errors raised while loading the upstream configuration.
///
/// These are construction-time failures: the server refuses to start
/// rather than serving requests against a broken upstream address.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("COASTER_API_URL environment variable is required")]
    MissingBaseUrl,
    #[error("COASTER_API_URL is not a valid URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Configuration for the upstream coaster API
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: Url,
}

impl UpstreamConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("COASTER_API_URL").map_err(|_| ConfigError::MissingBaseUrl)?;
        if raw.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let base_url = Url::parse(raw.trim())?;
        Ok(Self { base_url })
    }
}
