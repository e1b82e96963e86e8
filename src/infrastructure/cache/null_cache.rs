//! No-op cache implementation for disabled caching.

use super::service::CacheService;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Selected when `CACHE_ENABLED=false`. Every lookup misses, so resolution
/// always goes to the database.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _short_key: &str) -> Option<String> {
        None
    }

    async fn set_url(&self, _short_key: &str, _long_url: &str) {}

    async fn size(&self) -> usize {
        0
    }
}
