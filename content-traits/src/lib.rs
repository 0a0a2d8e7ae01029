//! Platform seams for the Kropka content core.
//!
//! The content pipeline never talks to the network or to persistent
//! storage directly. It goes through two small traits defined here:
//!
//! - [`HttpTransport`](http::HttpTransport) - issues GET requests and
//!   distinguishes "a response arrived" from "no response at all"
//! - [`KeyValueStore`](storage::KeyValueStore) - string key-value storage
//!   that survives restarts (or deliberately doesn't, for tests)
//!
//! Implementations live in `content-bridge`; consumers receive them as
//! `Arc<dyn Trait>` so tests can substitute mocks.

pub mod error;
pub mod http;
pub mod storage;

pub use error::{Result, StoreError};
pub use http::{HttpResponse, HttpTransport, TransportError};
pub use storage::KeyValueStore;
