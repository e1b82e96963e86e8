//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::{SHORT_KEY_LENGTH, generate_code};
use tracing::{debug, error, info};

/// Message returned when `long_url` is missing or empty.
pub const MISSING_LONG_URL: &str = "Missing long_url parameter";

/// Message returned when a short key has no mapping.
pub const SHORT_URL_NOT_FOUND: &str = "Short URL not found";

/// The link store: durable repository plus in-process cache.
///
/// The repository is the owner of record. The cache only mirrors links
/// created by this instance and is consulted first on resolution.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            link_repository,
            cache,
        }
    }

    /// Creates a short link for `long_url` under a freshly generated key.
    ///
    /// The key is inserted once; a collision with an existing key is not
    /// retried and surfaces as the repository's error. The cache is written
    /// only after the insert succeeds, the reverse of the older cache-first
    /// order, so a failed insert never leaves a cached redirect behind.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty. Nothing is
    /// written in that case.
    ///
    /// Returns the repository error (normally [`AppError::Internal`] with the
    /// database error text) if the insert fails.
    pub async fn create_short_link(&self, long_url: String) -> Result<ShortLink, AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request(MISSING_LONG_URL));
        }

        let new_link = NewShortLink {
            short_key: generate_code(SHORT_KEY_LENGTH),
            long_url,
        };

        let link = self.link_repository.create(new_link).await?;

        self.cache.set_url(&link.short_key, &link.long_url).await;

        info!(short_key = %link.short_key, "Created short link");

        Ok(link)
    }

    /// Resolves a short key to its long URL.
    ///
    /// Checks the cache first and falls back to the repository on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists. Repository read
    /// failures are logged and reported as not found as well.
    pub async fn resolve(&self, short_key: &str) -> Result<String, AppError> {
        if let Some(long_url) = self.cache.get_url(short_key).await {
            return Ok(long_url);
        }

        match self.link_repository.find_by_short_url(short_key).await {
            Ok(Some(link)) => Ok(link.long_url),
            Ok(None) => {
                debug!(short_key, "Short key not found");
                Err(AppError::not_found(SHORT_URL_NOT_FOUND))
            }
            Err(e) => {
                error!(short_key, "Failed to look up short key: {}", e);
                Err(AppError::not_found(SHORT_URL_NOT_FOUND))
            }
        }
    }

    /// Checks that the durable store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the repository error if the store does not respond.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::cache::{MemoryCache, NullCache};
    use crate::utils::code_generator::is_valid_code;

    fn service(repo: MockLinkRepository, cache: Arc<dyn CacheService>) -> LinkService {
        LinkService::new(Arc::new(repo), cache)
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_link| {
                is_valid_code(&new_link.short_key) && new_link.long_url == "https://example.com"
            })
            .times(1)
            .returning(|new_link| Ok(new_link.into()));

        let cache = Arc::new(MemoryCache::new());
        let service = service(mock_repo, cache.clone());

        let link = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert!(is_valid_code(&link.short_key));
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(
            cache.get_url(&link.short_key).await.as_deref(),
            Some("https://example.com")
        );
    }

    #[tokio::test]
    async fn test_create_short_link_empty_url_rejected() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let cache = Arc::new(MemoryCache::new());
        let service = service(mock_repo, cache.clone());

        let result = service.create_short_link(String::new()).await;

        assert_eq!(result, Err(AppError::bad_request(MISSING_LONG_URL)));
        assert_eq!(cache.size().await, 0);
    }

    #[tokio::test]
    async fn test_create_short_link_store_failure_leaves_cache_untouched() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("connection refused")));

        let cache = Arc::new(MemoryCache::new());
        let service = service(mock_repo, cache.clone());

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert_eq!(result, Err(AppError::internal("connection refused")));
        assert_eq!(cache.size().await, 0);
    }

    #[tokio::test]
    async fn test_resolve_cache_hit_skips_repository() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_short_url().times(0);

        let cache = Arc::new(MemoryCache::new());
        cache.set_url("cachedKey1", "https://cached.example").await;
        let service = service(mock_repo, cache);

        let long_url = service.resolve("cachedKey1").await.unwrap();
        assert_eq!(long_url, "https://cached.example");
    }

    #[tokio::test]
    async fn test_resolve_cache_miss_uses_repository() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .withf(|key| key == "storedKey1")
            .times(1)
            .returning(|key| Ok(Some(ShortLink::new(key, "https://stored.example"))));

        let service = service(mock_repo, Arc::new(MemoryCache::new()));

        let long_url = service.resolve("storedKey1").await.unwrap();
        assert_eq!(long_url, "https://stored.example");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(mock_repo, Arc::new(NullCache::new()));

        let result = service.resolve("doesnotexist").await;
        assert_eq!(result, Err(AppError::not_found(SHORT_URL_NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_resolve_repository_error_reported_as_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_short_url()
            .times(1)
            .returning(|_| Err(AppError::internal("pool timed out")));

        let service = service(mock_repo, Arc::new(NullCache::new()));

        let result = service.resolve("anyKey1234").await;
        assert_eq!(result, Err(AppError::not_found(SHORT_URL_NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_create_then_resolve_with_null_cache_hits_repository() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(new_link.into()));
        mock_repo
            .expect_find_by_short_url()
            .times(1)
            .returning(|key| Ok(Some(ShortLink::new(key, "https://example.com"))));

        let service = service(mock_repo, Arc::new(NullCache::new()));

        let link = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();
        let long_url = service.resolve(&link.short_key).await.unwrap();

        assert_eq!(long_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_check_store_propagates_error() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(AppError::internal("database unavailable")));

        let service = service(mock_repo, Arc::new(NullCache::new()));

        assert_eq!(
            service.check_store().await,
            Err(AppError::internal("database unavailable"))
        );
    }
}
