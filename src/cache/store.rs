//! TTL Cache Module
//!
//! String-keyed JSON store whose entries expire a fixed duration after
//! insertion. No capacity bound: entries live until expiry or restart.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == TTL Cache ==
/// In-memory cache with a single TTL shared by every entry.
///
/// Methods take `&mut self`; share an instance across tasks as
/// `Arc<RwLock<TtlCache>>` so every `get`/`set` runs under the lock.
#[derive(Debug)]
pub struct TtlCache {
    /// Key-value storage, at most one entry per key
    entries: HashMap<String, CacheEntry>,
    /// Lifetime of every entry in milliseconds
    ttl_ms: u64,
    /// Time source for insertion and expiry checks
    clock: Arc<dyn Clock>,
    /// Performance statistics
    stats: CacheStats,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache on the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            clock,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the stored value if present and not past `expires_at`.
    ///
    /// A stale entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` until `now + ttl`, replacing any previous entry.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), self.ttl_ms);
        self.entries.insert(key.into(), entry);
    }

    // == Remove ==
    /// Evicts an entry explicitly, returning its value if it was still live.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();
        self.entries
            .remove(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// TTL shared by every entry.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
