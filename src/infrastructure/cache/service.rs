//! Cache service trait.

use async_trait::async_trait;

/// Trait for caching short key to long URL mappings.
///
/// The cache is a process-local read accelerator in front of the durable
/// repository. It is filled only by links created by the running process,
/// has no expiry or eviction, and is never reconciled against the database.
/// Implementations must be safe to share across concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process concurrent map
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached long URL for a short key, if any.
    async fn get_url(&self, short_key: &str) -> Option<String>;

    /// Records a mapping. An existing entry for the same key is overwritten.
    async fn set_url(&self, short_key: &str, long_url: &str);

    /// Number of cached mappings.
    async fn size(&self) -> usize;
}
