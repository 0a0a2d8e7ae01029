//! Native implementations of the `content-traits` seams.
//!
//! - [`ReqwestTransport`](http::ReqwestTransport) - pooled reqwest client
//! - [`JsonFileStore`](store::JsonFileStore) - single-file JSON key-value
//!   store, the persistent cache backend
//! - [`MemoryStore`](store::MemoryStore) - in-memory substitute for tests

pub mod http;
pub mod store;

pub use http::ReqwestTransport;
pub use store::{JsonFileStore, MemoryStore};
