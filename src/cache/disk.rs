//! Durable cache tier: one JSON file per key under a cache directory
//!
//! Cache keys contain URL characters (`/`, `?`, `=`, `&`), so filenames use a
//! sanitized form of the key. The envelope stores the exact key and reads
//! verify it, so a sanitization collision reads as a miss rather than as the
//! wrong payload.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::cache::entry::StoredEntry;

/// Filesystem-backed store of serialized cache entries
#[derive(Debug, Clone)]
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Creates the store, ensuring the backing directory exists
    pub fn new(dir: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Maps a cache key to a stable filename
    fn file_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }

    /// Persists an entry, overwriting any previous one for the same key
    pub fn write(&self, entry: &StoredEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(self.file_path(&entry.key), json)
    }

    /// Reads the entry for `key`, if present and readable.
    ///
    /// Does not check expiry; the manager decides what a stale entry means.
    pub fn read(&self, key: &str) -> Option<StoredEntry> {
        let content = fs::read_to_string(self.file_path(key)).ok()?;
        let entry: StoredEntry = serde_json::from_str(&content).ok()?;
        // A different stored key means the filename collided
        if entry.key != key {
            return None;
        }
        Some(entry)
    }

    /// Deletes the entry for `key`; absence is not an error
    pub fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.file_path(key));
    }

    /// Deletes every entry in the store
    pub fn clear(&self) {
        let Ok(dir) = fs::read_dir(&self.dir) else {
            return;
        };
        for file in dir.flatten() {
            if file.path().extension().is_some_and(|ext| ext == "json") {
                let _ = fs::remove_file(file.path());
            }
        }
    }

    /// Scans the directory and deletes every expired entry.
    ///
    /// Unreadable files are deleted too; a corrupt entry can never be served
    /// again, so keeping it only leaks disk. Returns the number removed.
    pub fn sweep_expired(&self) -> usize {
        let Ok(dir) = fs::read_dir(&self.dir) else {
            warn!(dir = %self.dir.display(), "failed to scan cache directory for sweep");
            return 0;
        };

        let mut removed = 0;
        for file in dir.flatten() {
            let path = file.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            let expired = match fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str::<StoredEntry>(&content) {
                    Ok(entry) => entry.is_expired(),
                    Err(_) => true,
                },
                Err(_) => true,
            };
            if expired && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}
