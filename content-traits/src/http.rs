//! HTTP transport abstraction
//!
//! The content core only performs GET requests, but it needs one
//! distinction the raw client does not surface uniformly: whether a
//! failure happened *before* any response arrived (connection refused,
//! DNS, timeout) or the server answered with a non-2xx status. Transport
//! implementations return non-2xx responses as `Ok(HttpResponse)` and
//! reserve [`TransportError`] for the no-response case.

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure to obtain any response from the remote side.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Transport failure: {0}")]
    Other(String),
}

/// A received HTTP response, successful or not.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Check if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async GET-only HTTP transport.
///
/// # Contract
///
/// - A response with any status code, including 4xx/5xx, is `Ok`.
/// - `Err(TransportError)` means the request never completed.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
