//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use serde_json::Value;

// == Cache Entry ==
/// A cached tool report and its expiry, owned by one `TtlCache`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored JSON value
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds), always `inserted_at + ttl`
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry inserted at `now_ms` that lives for `ttl_ms`.
    pub fn new(value: Value, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            inserted_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is still live at exactly `expires_at`
    /// and expired strictly after it.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"score": 42}), 1_000, 500);

        assert_eq!(entry.value["score"], 42);
        assert_eq!(entry.inserted_at, 1_000);
        assert_eq!(entry.expires_at, 1_500);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        assert!(!entry.is_expired(1_000));
        assert!(!entry.is_expired(1_500), "Entry should be live at expires_at");
        assert!(entry.is_expired(1_501));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        assert_eq!(entry.ttl_remaining_ms(1_100), 400);
        assert_eq!(entry.ttl_remaining_ms(2_000), 0);
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = CacheEntry::new(json!(null), u64::MAX - 1, 10);
        assert_eq!(entry.expires_at, u64::MAX);
        assert!(!entry.is_expired(u64::MAX));
    }
}
