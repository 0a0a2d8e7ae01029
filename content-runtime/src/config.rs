//! Client configuration
//!
//! Builder for the settings the content client needs at startup: the API
//! base URL (overridable through `KROPKA_API_BASE_URL` for local
//! development), the request timeout, and where the persistent cache
//! file lives.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.kropka.example";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CACHE_FILE: &str = "kropka-cache.json";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "KROPKA_API_BASE_URL";

/// Settings for the content client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Path of the persistent cache file.
    pub cache_path: PathBuf,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    cache_path: Option<PathBuf>,
}

impl ClientConfigBuilder {
    /// Explicit base URL, taking precedence over the environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Build the configuration, resolving the base URL from the builder,
    /// the environment, or the default, in that order.
    pub fn build(self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .or_else(|| env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let request_timeout = self.request_timeout.unwrap_or(DEFAULT_TIMEOUT);
        if request_timeout.is_zero() {
            return Err(Error::Config("Request timeout must be non-zero".into()));
        }

        Ok(ClientConfig {
            base_url,
            request_timeout,
            cache_path: self
                .cache_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE)),
        })
    }
}
