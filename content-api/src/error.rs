//! Normalized API errors
//!
//! Every failure crossing the network boundary is collapsed into one
//! shape that UI layers can display and logs can carry: a message, the
//! HTTP status when a response arrived, the raw response body when one
//! was readable, and whether the request failed before any response.

use content_traits::http::{HttpResponse, TransportError};
use serde_json::Value;
use thiserror::Error;

const GENERIC_MESSAGE: &str = "Unexpected error";

/// Uniform error for failed content loads.
///
/// Constructed once at the failure boundary and never mutated.
/// `is_network_error` is true only when no response was received at all,
/// as opposed to a non-2xx response.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
    pub data: Option<Value>,
    pub is_network_error: bool,
}

impl ApiError {
    /// Normalize a non-2xx response.
    ///
    /// The message comes from the body's `message` field when present,
    /// otherwise a transport-level description of the status. A body that
    /// is not valid JSON survives as its raw text.
    pub fn from_response(response: &HttpResponse) -> Self {
        let data: Option<Value> = response.json().ok().or_else(|| {
            Some(Value::String(
                String::from_utf8_lossy(&response.body).into_owned(),
            ))
        });
        let message = data
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));

        Self {
            message,
            status: Some(response.status),
            data,
            is_network_error: false,
        }
    }

    /// Normalize a failure to obtain any response.
    pub fn from_transport(err: &TransportError) -> Self {
        Self {
            message: err.to_string(),
            status: None,
            data: None,
            is_network_error: true,
        }
    }

    /// Normalize a failure outside the network layer (e.g. a 2xx response
    /// whose body is not valid JSON).
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            message
        };

        Self {
            message,
            status: None,
            data: None,
            is_network_error: false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
