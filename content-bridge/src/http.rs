//! HTTP transport implementation using reqwest

use std::time::Duration;

use async_trait::async_trait;
use content_traits::http::{HttpResponse, HttpTransport, TransportError};
use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reqwest-based transport.
///
/// Non-2xx responses come back as `Ok`; only failures to obtain a
/// response at all (connect errors, timeouts) become [`TransportError`].
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the default request timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .pool_max_idle_per_host(4)
            .user_agent(concat!("kropka-content/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Wrap an externally configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn map_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(url = %url, "Executing GET request");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "GET request failed without a response");
            Self::map_error(e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::map_error)?;

        debug!(url = %url, status = status, bytes = body.len(), "GET request completed");

        Ok(HttpResponse { status, body })
    }
}
