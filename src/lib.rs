//! geoscan - Deterministic SEO/GEO analysis API
//!
//! Serves mock audit reports whose numbers are derived from a fixed hash of
//! the normalized input, memoized per tool in an in-memory TTL cache.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod tools;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
