//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `short_links` table.
///
/// Uses SQLx bound parameters, so short keys and URLs are never interpolated
/// into SQL text.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        sqlx::query("INSERT INTO short_links (short_url, long_url) VALUES ($1, $2)")
            .bind(&new_link.short_key)
            .bind(&new_link.long_url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(new_link.into())
    }

    async fn find_by_short_url(&self, short_key: &str) -> Result<Option<ShortLink>, AppError> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT short_url, long_url FROM short_links WHERE short_url = $1")
                .bind(short_key)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(short_key, long_url)| ShortLink::new(short_key, long_url)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
