#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use dashmap::DashMap;
use short_links::prelude::*;
use short_links::routes::app_router;
use std::sync::Arc;

/// Repository keeping links in memory, with the table's unique-key behaviour.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, String>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(self, short_key: &str, long_url: &str) -> Self {
        self.links.insert(short_key.to_string(), long_url.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn get(&self, short_key: &str) -> Option<String> {
        self.links.get(short_key).map(|e| e.value().clone())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        if self.links.contains_key(&new_link.short_key) {
            return Err(AppError::internal(format!(
                "duplicate key value violates unique constraint \"short_links_pkey\": {}",
                new_link.short_key
            )));
        }
        self.links
            .insert(new_link.short_key.clone(), new_link.long_url.clone());
        Ok(new_link.into())
    }

    async fn find_by_short_url(&self, short_key: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .get(short_key)
            .map(|long_url| ShortLink::new(short_key, long_url)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Repository whose every operation fails with the given message.
pub struct FailingLinkRepository {
    pub message: String,
}

impl FailingLinkRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewShortLink) -> Result<ShortLink, AppError> {
        Err(AppError::internal(self.message.clone()))
    }

    async fn find_by_short_url(&self, _short_key: &str) -> Result<Option<ShortLink>, AppError> {
        Err(AppError::internal(self.message.clone()))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal(self.message.clone()))
    }
}

pub fn create_test_state(
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    AppState::new(Arc::new(LinkService::new(repository, cache)))
}

/// Full application router over the given repository and cache.
pub fn create_test_server(
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
) -> TestServer {
    TestServer::new(app_router(create_test_state(repository, cache))).unwrap()
}
