//! Background sweep of expired durable cache entries
//!
//! Entries nobody re-requests would otherwise sit on disk forever; the sweep
//! bounds that growth by purging everything past its expiration on a fixed
//! interval, independently of any read or write.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheManager;

/// Spawns the periodic expired-entry sweep.
///
/// The task loops forever, sleeping `interval` between passes. Abort the
/// returned handle at process teardown; the sweep holds no state worth
/// flushing.
pub fn spawn_sweep_task(cache: CacheManager, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting cache sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.sweep_expired();
            if removed > 0 {
                info!(removed, "cache sweep removed expired entries");
            } else {
                debug!("cache sweep found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Marker {
        id: u32,
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_dir(temp_dir.path().to_path_buf()).unwrap();

        cache.set(&Marker { id: 1 }, "cache_gone", Some(chrono::Duration::zero()));
        cache.set(&Marker { id: 2 }, "cache_kept", None);

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(100));
        tokio::time::sleep(Duration::from_millis(350)).await;
        handle.abort();

        assert!(cache.get::<Marker>("cache_gone").is_none());
        assert_eq!(cache.get::<Marker>("cache_kept"), Some(Marker { id: 2 }));
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = CacheManager::with_dir(temp_dir.path().to_path_buf()).unwrap();

        let handle = spawn_sweep_task(cache, Duration::from_secs(60));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished());
    }
}
