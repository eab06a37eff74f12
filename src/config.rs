//! Client configuration
//!
//! One `ClientConfig` is built at process start and used to wire the cache
//! manager and API client. TTL policy is not configurable here; it is a
//! static per-endpoint table owned by the cache manager.

use std::path::PathBuf;
use std::time::Duration;

/// Wiring knobs for the client core
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto; must end with a slash
    pub base_url: String,
    /// Override for the durable cache directory (platform cache dir if None)
    pub cache_dir: Option<PathBuf>,
    /// Maximum number of entries held in the memory tier
    pub memory_count_limit: usize,
    /// Maximum total payload bytes held in the memory tier
    pub memory_byte_limit: usize,
    /// Interval between background sweeps of expired durable entries
    pub sweep_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://owlpeer.com/api/".to_string(),
            cache_dir: None,
            memory_count_limit: 100,
            memory_byte_limit: 50 * 1024 * 1024, // 50 MB
            sweep_interval: Duration::from_secs(60),
        }
    }
}
