//! Key-value storage abstraction
//!
//! The cache layer persists last-known-good payloads as JSON text under
//! string keys. This trait is the only storage surface it touches, so a
//! file-backed store, a browser-style store, or an in-memory map for
//! tests are all interchangeable.

use async_trait::async_trait;

use crate::error::Result;

/// String key-value storage that outlives the process (implementations
/// for tests may choose not to).
///
/// Values are opaque strings; the cache layer decides on the encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value. `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}
