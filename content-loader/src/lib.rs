//! # Language-reactive reload coordination
//!
//! Keeps the cached content pipeline synchronized with a changing
//! "current language" value.
//!
//! ## Overview
//!
//! A [`ResourceLoader`](loader::ResourceLoader) owns one fetchable
//! resource and decides *when* a reload for *which language* happens:
//!
//! - an observed language change triggers an unforced load whose error is
//!   reported to the hook and then swallowed
//! - a manual [`load_current`](loader::ResourceLoader::load_current)
//!   always fetches and propagates failures
//! - unforced loads are de-duplicated: at most one fetch per distinct
//!   language unless data is missing
//!
//! The reactive value is a plain `tokio::sync::watch` channel, so any
//! locale system can drive it. [`language`] maps locale descriptors to
//! API language codes.

pub mod language;
pub mod loader;

pub use language::{resolve_api_language, Locale, FALLBACK_LANG};
pub use loader::{LanguageFetcher, ResourceLoader};
