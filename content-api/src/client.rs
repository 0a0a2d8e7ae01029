//! API client
//!
//! Thin GET-only client over an injected [`HttpTransport`]. Joins the
//! base URL with endpoint paths and appends the optional `lang` query
//! parameter, omitting it entirely when absent or empty - the API treats
//! `?lang=` and no parameter differently, and only the latter is valid.

use std::sync::Arc;

use content_traits::http::HttpTransport;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};

pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    ///
    /// A trailing slash on the base URL is tolerated; endpoint paths are
    /// expected to start with `/`.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str, lang: Option<&str>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(lang) = lang.filter(|l| !l.is_empty()) {
            url.push_str("?lang=");
            url.push_str(lang);
        }
        url
    }

    /// GET an endpoint and parse the body as JSON.
    ///
    /// Failures are normalized per [`ApiError`]: transport failures carry
    /// `is_network_error`, non-2xx responses carry status and body, and a
    /// 2xx response with an unreadable body is an unexpected error.
    pub async fn get_json(&self, path: &str, lang: Option<&str>) -> Result<Value> {
        let url = self.url_for(path, lang);
        debug!(url = %url, "Requesting API resource");

        let response = self
            .transport
            .get(&url)
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        if !response.is_success() {
            return Err(ApiError::from_response(&response));
        }

        response
            .json()
            .map_err(|e| ApiError::unexpected(format!("Invalid JSON in response: {}", e)))
    }
}
