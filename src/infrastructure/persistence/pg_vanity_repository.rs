//! PostgreSQL implementation of the vanity URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVanityRecord, VanityRecord};
use crate::domain::repositories::VanityRepository;
use crate::error::AppError;

/// Row shape of the `vanity_urls` table.
#[derive(Debug, sqlx::FromRow)]
struct VanityRow {
    id: i64,
    vanity_url: String,
    site: String,
    link: String,
    redirect_kind: String,
    created_at: DateTime<Utc>,
}

impl From<VanityRow> for VanityRecord {
    fn from(row: VanityRow) -> Self {
        let redirect_kind = row.redirect_kind.parse().unwrap_or_else(|e| {
            tracing::warn!(id = row.id, error = %e, "Falling back to temporary redirect");
            Default::default()
        });

        VanityRecord::new(
            row.id,
            row.vanity_url,
            row.site,
            row.link,
            redirect_kind,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for vanity URL records.
///
/// Uses bound parameters for every value; ties on `(vanity_url, site)` are
/// broken by the lowest `id`.
pub struct PgVanityRepository {
    pool: Arc<PgPool>,
}

impl PgVanityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VanityRepository for PgVanityRepository {
    async fn find_first(
        &self,
        vanity_url: &str,
        site: &str,
    ) -> Result<Option<VanityRecord>, AppError> {
        let row = sqlx::query_as::<_, VanityRow>(
            r#"
            SELECT id, vanity_url, site, link, redirect_kind, created_at
            FROM vanity_urls
            WHERE vanity_url = $1 AND site = $2
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(vanity_url)
        .bind(site)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(VanityRecord::from))
    }

    async fn insert(&self, new_record: NewVanityRecord) -> Result<VanityRecord, AppError> {
        let row = sqlx::query_as::<_, VanityRow>(
            r#"
            INSERT INTO vanity_urls (vanity_url, site, link, redirect_kind)
            VALUES ($1, $2, $3, $4)
            RETURNING id, vanity_url, site, link, redirect_kind, created_at
            "#,
        )
        .bind(&new_record.vanity_url)
        .bind(&new_record.site)
        .bind(&new_record.link)
        .bind(new_record.redirect_kind.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vanity_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
