//! Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Lazy expiry on access already keeps lookups correct; the sweeper adds
/// hygiene for entries nothing reads anymore. The task runs in an
/// infinite loop, sleeping for the given interval between sweeps and
/// taking a write lock on the shared cache for each one.
///
/// # Arguments
/// * `cache` - Shared handle to the cache being swept
/// * `every` - Interval between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the
/// task during shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(MemoCache::new(CacheConfig::default())?));
/// let sweeper = spawn_sweeper(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<V>(cache: Arc<RwLock<MemoCache<V>>>, every: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting sweeper task with interval of {:?}", every);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(every).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            // Log sweep results
            if removed > 0 {
                info!("Sweep removed {} expired entries", removed);
            } else {
                debug!("Sweep found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let config = CacheConfig::new(Duration::from_millis(200), 100);
        let cache = Arc::new(RwLock::new(MemoCache::new(config).unwrap()));

        // Add an entry that will lapse quickly
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("expire_soon", "value".to_string());
        }

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(100));

        // Wait past the TTL plus several sweep intervals
        tokio::time::sleep(Duration::from_millis(600)).await;

        // The entry is gone without any access having purged it
        {
            let cache_guard = cache.read().await;
            assert_eq!(cache_guard.len(), 0, "Expired entry should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_live_entries() {
        let config = CacheConfig::new(Duration::from_secs(10), 100);
        let cache = Arc::new(RwLock::new(MemoCache::new(config).unwrap()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("long_lived", "value".to_string());
        }

        let handle = spawn_sweeper(cache.clone(), Duration::from_millis(100));

        // Let several sweeps run
        tokio::time::sleep(Duration::from_millis(400)).await;

        {
            let cache_guard = cache.read().await;
            assert_eq!(
                cache_guard.peek("long_lived"),
                Some(&"value".to_string()),
                "Live entry should not be swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let cache: Arc<RwLock<MemoCache<String>>> =
            Arc::new(RwLock::new(MemoCache::new(CacheConfig::default()).unwrap()));

        let handle = spawn_sweeper(cache, Duration::from_millis(100));

        // Abort immediately
        handle.abort();

        // Wait a bit and verify the task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
