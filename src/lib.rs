//! Workspace facade crate.
//!
//! Host applications can depend on `kropka-content` and reach every
//! workspace crate through one dependency instead of wiring each crate
//! individually.

pub use content_api as api;
pub use content_bridge as bridge;
pub use content_loader as loader;
pub use content_runtime as runtime;
pub use content_traits as traits;
