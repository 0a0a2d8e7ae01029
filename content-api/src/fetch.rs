//! Cached-resource fetch protocol
//!
//! The core of the pipeline: fetch fresh content, normalize it, stamp it
//! and persist it - or, when the fetch fails, fall back to whatever the
//! cache still holds for the same `(resource, language)` pair. Only when
//! both the network and the cache come up empty does the caller see an
//! error.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::cache::{build_cache_key, ContentCache};
use crate::client::ApiClient;
use crate::error::Result;

/// Static description of one fetchable content domain.
pub struct ResourceRequest<T> {
    /// API endpoint path, e.g. `/api/v1/prices`.
    pub endpoint: &'static str,
    /// Cache key prefix, partitioned per language at fetch time.
    pub cache_key_base: &'static str,
    /// Label used in fallback warnings.
    pub log_label: &'static str,
    /// Maps the raw response body to the domain payload.
    pub transform: fn(Value) -> T,
}

impl<T> Clone for ResourceRequest<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceRequest<T> {}

/// What gets persisted: the payload plus the moment it was fetched.
///
/// A written entry always carries `fetched_at`; an entry read back is
/// structurally identical but its freshness is for the caller to judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    #[serde(flatten)]
    pub payload: T,
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Result of a load: the payload and whether it came from the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub payload: T,
    pub fetched_at: Option<DateTime<Utc>>,
    pub from_cache: bool,
}

/// Fetch a resource, falling back to the cached entry on failure.
///
/// On success the transformed payload is stamped with the current time,
/// written to the language-partitioned cache key, and returned with
/// `from_cache: false`. On failure the normalized error is either
/// swallowed (cache hit, returned with `from_cache: true`) or propagated
/// (cache miss).
pub async fn load_cached_resource<T>(
    client: &ApiClient,
    cache: &ContentCache,
    request: &ResourceRequest<T>,
    lang: Option<&str>,
) -> Result<Loaded<T>>
where
    T: Serialize + DeserializeOwned,
{
    let cache_key = build_cache_key(request.cache_key_base, lang);

    match client.get_json(request.endpoint, lang).await {
        Ok(raw) => {
            let entry = CacheEntry {
                payload: (request.transform)(raw),
                fetched_at: Some(Utc::now()),
            };
            cache.write(&cache_key, &entry).await;

            Ok(Loaded {
                payload: entry.payload,
                fetched_at: entry.fetched_at,
                from_cache: false,
            })
        }
        Err(api_error) => match cache.read::<CacheEntry<T>>(&cache_key).await {
            Some(entry) => {
                warn!(
                    resource = request.log_label,
                    error = %api_error,
                    status = ?api_error.status,
                    network = api_error.is_network_error,
                    "Falling back to cached value"
                );

                Ok(Loaded {
                    payload: entry.payload,
                    fetched_at: entry.fetched_at,
                    from_cache: true,
                })
            }
            None => Err(api_error),
        },
    }
}
