//! Persistent content cache
//!
//! Typed JSON reads and writes over an injected [`KeyValueStore`]. The
//! cache is a safety net, not a source of truth: every storage or
//! serialization failure is logged and absorbed, degrading a read to a
//! miss and a write to a no-op. Entries have no TTL; staleness is judged
//! by callers via the `fetched_at` timestamp they store in the entry.

use std::sync::Arc;

use content_traits::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Build a language-partitioned cache key.
///
/// Distinct language codes never collide: the base key is a compile-time
/// constant per domain and the language is appended after a `:`.
pub fn build_cache_key(base: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) if !lang.is_empty() => format!("{}:{}", base, lang),
        _ => base.to_string(),
    }
}

/// JSON cache over a key-value store. Never raises to the caller.
pub struct ContentCache {
    store: Arc<dyn KeyValueStore>,
}

impl ContentCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read and deserialize an entry. `None` when storage is unavailable,
    /// the key is absent, or the stored text is malformed.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key = %key, error = %err, "Cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %key, error = %err, "Discarding malformed cache entry");
                None
            }
        }
    }

    /// Serialize and store an entry, best-effort.
    pub async fn write<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %key, error = %err, "Cache serialization failed");
                return;
            }
        };

        if let Err(err) = self.store.set(key, &raw).await {
            warn!(key = %key, error = %err, "Cache write failed");
        }
    }
}
