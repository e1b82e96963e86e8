//! In-process cache backed by a concurrent hash map.

use super::service::CacheService;
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// Unbounded in-memory cache of links created by this process.
///
/// Entries live until the process exits.
#[derive(Default)]
pub struct MemoryCache {
    inner: DashMap<String, String>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, short_key: &str) -> Option<String> {
        match self.inner.get(short_key) {
            Some(entry) => {
                debug!("Cache HIT: {}", short_key);
                Some(entry.value().clone())
            }
            None => {
                debug!("Cache MISS: {}", short_key);
                None
            }
        }
    }

    async fn set_url(&self, short_key: &str, long_url: &str) {
        self.inner.insert(short_key.to_string(), long_url.to_string());
    }

    async fn size(&self) -> usize {
        self.inner.len()
    }
}
