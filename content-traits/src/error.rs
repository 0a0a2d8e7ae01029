use thiserror::Error;

/// Failures raised by [`KeyValueStore`](crate::storage::KeyValueStore)
/// implementations.
///
/// Callers of the cache layer never see these; the cache absorbs them and
/// degrades to a miss. They exist so implementations can report *why*
/// storage misbehaved in logs.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Storage serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
