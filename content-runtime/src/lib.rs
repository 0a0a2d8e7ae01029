//! Runtime configuration and logging for the Kropka content client.

pub mod config;
pub mod error;
pub mod logging;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
