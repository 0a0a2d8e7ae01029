//! # Cached content API
//!
//! Fetch-or-fallback pipeline for the Kropka studio content domains
//! (studio, prices, equipment, teachers, rules).
//!
//! ## Overview
//!
//! Each domain is fetched from `{base_url}/api/v1/{resource}` with an
//! optional `lang` query parameter, normalized into its payload shape,
//! timestamped, and written to a language-partitioned cache key. When a
//! fetch fails and a cached entry exists, the cached payload is returned
//! flagged `from_cache` instead of surfacing the error; the error only
//! reaches the caller when no fallback data exists.
//!
//! ## Components
//!
//! - [`ApiError`](error::ApiError) - uniform error shape across the
//!   network boundary
//! - [`ApiClient`](client::ApiClient) - GET requests against the API base
//!   URL with language partitioning of the query string
//! - [`ContentCache`](cache::ContentCache) - typed JSON reads and writes
//!   over an injected [`KeyValueStore`](content_traits::KeyValueStore),
//!   absorbing every storage failure
//! - [`load_cached_resource`](fetch::load_cached_resource) - the
//!   fetch-or-fallback protocol
//! - [`ResourceStore`](store::ResourceStore) - per-domain state holder
//!   built on top of the protocol

pub mod cache;
pub mod client;
pub mod error;
pub mod fetch;
pub mod payload;
pub mod resources;
pub mod store;

pub use cache::{build_cache_key, ContentCache};
pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use fetch::{load_cached_resource, CacheEntry, Loaded, ResourceRequest};
pub use payload::{ListPayload, ObjectPayload};
pub use store::{ResourceState, ResourceStore};
