//! Expired Entry Purge Task
//!
//! Background task that periodically drops expired entries from every tool
//! cache. Reads already ignore stale entries; this bounds memory held by keys
//! that are never requested again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs and taking each cache's write lock only while purging it.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::new(Duration::from_secs(3600));
/// let cleanup_handle = spawn_cleanup_task(state.caches(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(caches: Vec<SharedCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache purge task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let mut removed = 0;
            for cache in &caches {
                removed += cache.write().await.purge_expired();
            }

            if removed > 0 {
                info!("Cache purge: removed {} expired entries", removed);
            } else {
                debug!("Cache purge: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, TtlCache};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    const TTL: Duration = Duration::from_secs(60);

    fn shared(clock: &ManualClock) -> SharedCache {
        Arc::new(RwLock::new(TtlCache::with_clock(TTL, Arc::new(clock.clone()))))
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let clock = ManualClock::new(0);
        let a = shared(&clock);
        let b = shared(&clock);

        a.write().await.set("example.com", json!(1));
        b.write().await.set("acme|", json!(2));
        clock.advance(TTL + Duration::from_millis(1));

        let handle = spawn_cleanup_task(vec![a.clone(), b.clone()], 1);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(a.read().await.is_empty());
        assert!(b.read().await.is_empty());
        assert_eq!(a.read().await.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_live_entries() {
        let clock = ManualClock::new(0);
        let cache = shared(&clock);
        cache.write().await.set("example.com", json!({"score": 90}));

        let handle = spawn_cleanup_task(vec![cache.clone()], 1);
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(cache.write().await.get("example.com"), Some(json!({"score": 90})));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(Vec::new(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
