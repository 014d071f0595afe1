//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
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
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        // ON CONFLICT DO NOTHING makes the insert the atomic
        // "insert if absent" unit: under a concurrent duplicate request,
        // exactly one row exists afterwards and both callers read it back.
        let inserted = sqlx::query_as::<_, ShortLink>(
            r#"
            INSERT INTO urls (code, long_url, owner_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING code, long_url, created_at, owner_id
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(&new_link.owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(link) = inserted {
            return Ok(link);
        }

        // Lost the race: the row for this code already exists.
        let existing = sqlx::query_as::<_, ShortLink>(
            "SELECT code, long_url, created_at, owner_id FROM urls WHERE code = $1",
        )
        .bind(&new_link.code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(existing)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let link = sqlx::query_as::<_, ShortLink>(
            "SELECT code, long_url, created_at, owner_id FROM urls WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortLink>, AppError> {
        let links = sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT code, long_url, created_at, owner_id
            FROM urls
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }
}
