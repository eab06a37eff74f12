//! Cache manager owning the durable store and its in-memory accelerator
//!
//! The manager is the only component that touches the backing tiers. It
//! exposes typed get/set/remove/clear operations, derives cache keys from
//! endpoint identity, and resolves the per-endpoint expiration policy.
//!
//! Every per-operation failure after construction degrades to cache-miss
//! behavior: serialization, persistence, and decode errors are logged and
//! swallowed, never propagated to callers.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Duration;
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::cache::disk::DiskStore;
use crate::cache::entry::StoredEntry;
use crate::cache::memory::MemoryTier;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;

/// TTL for endpoints outside any special policy class
const DEFAULT_EXPIRATION_SECS: i64 = 300; // 5 minutes

/// TTL for the user-profile endpoint class
const PROFILE_EXPIRATION_SECS: i64 = 1800; // 30 minutes

/// Errors constructing the cache backend.
///
/// These are the only fatal cache errors: without a durable backing the
/// process cannot proceed, so construction failures are returned to the
/// caller to fail fast at startup.
#[derive(Debug, Error)]
pub enum CacheInitError {
    /// No platform cache directory could be determined
    #[error("Could not determine a cache directory for this platform")]
    NoCacheDir,

    /// The backing directory could not be created
    #[error("Failed to create cache storage at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Durable+memory-backed store of typed, expiring response blobs.
///
/// Cloning shares both tiers; the intended wiring is one manager per
/// process, constructed at startup and handed to the API client.
#[derive(Debug, Clone)]
pub struct CacheManager {
    disk: DiskStore,
    memory: Arc<Mutex<MemoryTier>>,
}

impl CacheManager {
    /// Creates a manager using the platform cache directory (or the
    /// configured override) and the configured memory bounds.
    pub fn new(config: &ClientConfig) -> Result<Self, CacheInitError> {
        let dir = match &config.cache_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", "owlpeer")
                .ok_or(CacheInitError::NoCacheDir)?
                .cache_dir()
                .to_path_buf(),
        };
        let disk =
            DiskStore::new(dir.clone()).map_err(|source| CacheInitError::Io { path: dir, source })?;
        Ok(Self {
            disk,
            memory: Arc::new(Mutex::new(MemoryTier::new(
                config.memory_count_limit,
                config.memory_byte_limit,
            ))),
        })
    }

    /// Creates a manager rooted at a specific directory with default memory
    /// bounds. Useful for tests.
    pub fn with_dir(dir: PathBuf) -> Result<Self, CacheInitError> {
        let config = ClientConfig {
            cache_dir: Some(dir),
            ..ClientConfig::default()
        };
        Self::new(&config)
    }

    /// Derives the cache key for an endpoint.
    ///
    /// The key is a pure function of path and query parameters; parameters
    /// are sorted so that logically identical endpoints always produce the
    /// same key, across calls and across process restarts.
    pub fn cache_key(endpoint: &Endpoint) -> String {
        let mut query = endpoint.query().to_vec();
        query.sort();
        if query.is_empty() {
            return format!("cache_{}", endpoint.path());
        }
        let query = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("cache_{}?{}", endpoint.path(), query)
    }

    /// Static TTL policy: user-profile endpoints cache long, everything
    /// else gets the short default. Total over all endpoints.
    pub fn expiration_policy(endpoint: &Endpoint) -> Duration {
        if endpoint.path().contains("auth/profile") {
            Duration::seconds(PROFILE_EXPIRATION_SECS)
        } else {
            Duration::seconds(DEFAULT_EXPIRATION_SECS)
        }
    }

    /// Serializes `value` and writes it to both tiers with
    /// `expires_at = now + ttl` (default TTL when `ttl` is `None`).
    ///
    /// Failures are logged and swallowed; a failed write degrades to "not
    /// cached". The durable tier is written first, and on a disk failure the
    /// memory insert is skipped so the memory tier is never the sole holder
    /// of an entry.
    pub fn set<T: Serialize>(&self, value: &T, key: &str, ttl: Option<Duration>) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(key, %error, "failed to serialize value for cache");
                return;
            }
        };

        let ttl = ttl.unwrap_or_else(|| Duration::seconds(DEFAULT_EXPIRATION_SECS));
        let entry = StoredEntry::new(key.to_string(), payload, ttl);

        if let Err(error) = self.disk.write(&entry) {
            warn!(key, %error, "failed to persist cache entry");
            return;
        }
        if let Ok(mut memory) = self.memory.lock() {
            memory.insert(entry);
        }
    }

    /// Returns the cached value for `key`, or `None` if the entry is
    /// absent, expired, or fails to decode into `T` (a decode failure is
    /// treated exactly like a miss). Never returns an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        if let Ok(mut memory) = self.memory.lock() {
            if let Some(entry) = memory.get(key) {
                if entry.is_expired() {
                    memory.remove(key);
                    drop(memory);
                    self.disk.remove(key);
                    return None;
                }
                return match serde_json::from_str(&entry.payload) {
                    Ok(value) => Some(value),
                    Err(error) => {
                        warn!(key, %error, "cached payload failed to decode, treating as miss");
                        memory.remove(key);
                        drop(memory);
                        self.disk.remove(key);
                        None
                    }
                };
            }
        }

        let entry = self.disk.read(key)?;
        if entry.is_expired() {
            return None;
        }
        match serde_json::from_str(&entry.payload) {
            Ok(value) => {
                // Promote the durable hit into the hot tier
                if let Ok(mut memory) = self.memory.lock() {
                    memory.insert(entry);
                }
                Some(value)
            }
            Err(error) => {
                warn!(key, %error, "cached payload failed to decode, treating as miss");
                None
            }
        }
    }

    /// Deletes one entry from both tiers; unknown keys are ignored
    pub fn remove(&self, key: &str) {
        if let Ok(mut memory) = self.memory.lock() {
            memory.remove(key);
        }
        self.disk.remove(key);
    }

    /// Deletes every entry from both tiers.
    ///
    /// Used on sign-out, subscription purchase, and account deletion, where
    /// broad swaths of server state are invalidated at once.
    pub fn clear_all(&self) {
        if let Ok(mut memory) = self.memory.lock() {
            memory.clear();
        }
        self.disk.clear();
    }

    /// Deletes every expired entry from the durable tier, returning the
    /// number removed. Expired memory entries are dropped lazily on read.
    pub fn sweep_expired(&self) -> usize {
        self.disk.sweep_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[derive(Debug, Deserialize)]
    struct OtherShape {
        #[allow(dead_code)]
        missing_field: String,
    }

    fn create_test_cache() -> (CacheManager, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache =
            CacheManager::with_dir(temp_dir.path().to_path_buf()).expect("Cache should initialize");
        (cache, temp_dir)
    }

    fn sample() -> TestData {
        TestData {
            name: "sample".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_cache_key_is_stable_for_plain_paths() {
        let key = CacheManager::cache_key(&Endpoint::my_courses());
        assert_eq!(key, "cache_my-courses/");
        assert_eq!(key, CacheManager::cache_key(&Endpoint::my_courses()));
    }

    #[test]
    fn test_cache_key_sorts_query_parameters() {
        let uuid = Uuid::nil();
        let key = CacheManager::cache_key(&Endpoint::get_flashcards(uuid));
        assert_eq!(key, format!("cache_flashcards/?video_uuid={}", uuid));
    }

    #[test]
    fn test_identical_endpoints_collide_on_one_key() {
        let uuid = Uuid::new_v4();
        assert_eq!(
            CacheManager::cache_key(&Endpoint::get_quiz(uuid)),
            CacheManager::cache_key(&Endpoint::get_quiz(uuid))
        );
    }

    #[test]
    fn test_expiration_policy_profile_is_long() {
        let profile = CacheManager::expiration_policy(&Endpoint::get_profile());
        assert_eq!(profile, Duration::seconds(PROFILE_EXPIRATION_SECS));
    }

    #[test]
    fn test_expiration_policy_default_is_short() {
        for endpoint in [
            Endpoint::my_courses(),
            Endpoint::get_flashcards(Uuid::nil()),
            Endpoint::health_check(),
        ] {
            assert_eq!(
                CacheManager::expiration_policy(&endpoint),
                Duration::seconds(DEFAULT_EXPIRATION_SECS)
            );
        }
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_roundtrip", None);

        let read: Option<TestData> = cache.get("cache_roundtrip");
        assert_eq!(read, Some(sample()));
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let (cache, _dir) = create_test_cache();
        let read: Option<TestData> = cache.get("cache_absent");
        assert!(read.is_none());
    }

    #[test]
    fn test_zero_ttl_entry_reads_as_miss() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_expired", Some(Duration::zero()));

        let read: Option<TestData> = cache.get("cache_expired");
        assert!(read.is_none(), "Expired entries must never be served");
    }

    #[test]
    fn test_decode_failure_is_a_miss() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_shape", None);

        let read: Option<OtherShape> = cache.get("cache_shape");
        assert!(read.is_none(), "Decode failure must read as a miss");
    }

    #[test]
    fn test_remove_deletes_a_live_entry() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_victim", None);
        cache.remove("cache_victim");

        let read: Option<TestData> = cache.get("cache_victim");
        assert!(read.is_none());
        // Removing again must be a no-op
        cache.remove("cache_victim");
    }

    #[test]
    fn test_clear_all_flushes_every_entry() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_a", None);
        cache.set(&sample(), "cache_b", None);

        cache.clear_all();

        assert!(cache.get::<TestData>("cache_a").is_none());
        assert!(cache.get::<TestData>("cache_b").is_none());
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let (cache, _dir) = create_test_cache();
        cache.set(&sample(), "cache_live", None);
        cache.set(&sample(), "cache_dead", Some(Duration::zero()));

        let removed = cache.sweep_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.get::<TestData>("cache_live"), Some(sample()));
        assert!(cache.get::<TestData>("cache_dead").is_none());
    }

    #[test]
    fn test_memory_eviction_is_invisible_to_callers() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = ClientConfig {
            cache_dir: Some(temp_dir.path().to_path_buf()),
            memory_count_limit: 1,
            ..ClientConfig::default()
        };
        let cache = CacheManager::new(&config).expect("Cache should initialize");

        cache.set(&sample(), "cache_first", None);
        // Second insert evicts the first from the one-slot memory tier
        cache.set(&sample(), "cache_second", None);

        // The durable copy still serves the evicted key
        assert_eq!(cache.get::<TestData>("cache_first"), Some(sample()));
        assert_eq!(cache.get::<TestData>("cache_second"), Some(sample()));
    }

    #[test]
    fn test_entries_survive_a_manager_restart() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        {
            let cache = CacheManager::with_dir(temp_dir.path().to_path_buf()).unwrap();
            cache.set(&sample(), "cache_durable", None);
        }
        let reopened = CacheManager::with_dir(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get::<TestData>("cache_durable"), Some(sample()));
    }
}
