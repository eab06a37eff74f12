//! Cache entry envelope shared by the memory and disk tiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single cached response, keyed by endpoint identity.
///
/// The payload is the JSON-encoded response body; the manager decodes it
/// into the caller's expected type on read. Entries are overwritten
/// wholesale on re-fetch, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Cache key this entry was written under
    pub key: String,
    /// JSON-encoded response body
    pub payload: String,
    /// When the entry was written
    pub cached_at: DateTime<Utc>,
    /// When the entry becomes stale
    pub expires_at: DateTime<Utc>,
}

impl StoredEntry {
    /// Creates an entry expiring `ttl` from now
    pub fn new(key: String, payload: String, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            key,
            payload,
            cached_at: now,
            expires_at: now + ttl,
        }
    }

    /// An entry is stale at or after its expiration instant
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Approximate in-memory cost of this entry in bytes
    pub fn cost(&self) -> usize {
        self.key.len() + self.payload.len()
    }
}
