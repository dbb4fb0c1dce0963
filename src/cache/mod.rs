//! Cache Module
//!
//! Provides the in-memory TTL cache that memoizes tool reports.

mod clock;
mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

/// A cache instance shared between request handlers and the purge task.
pub type SharedCache = Arc<RwLock<TtlCache>>;
