//! Layout repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::layout::{Layout, LayoutKind};

/// Repository for the singleton-per-kind layout rows.
#[derive(Debug, Clone)]
pub struct LayoutRepository {
    pool: PgPool,
}

impl LayoutRepository {
    /// Create a new layout repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the layout row for a kind.
    pub async fn find_by_kind(&self, kind: LayoutKind) -> AppResult<Option<Layout>> {
        sqlx::query_as::<_, Layout>("SELECT * FROM layouts WHERE kind = $1")
            .bind(kind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find layout", e))
    }

    /// Insert a layout row.
    pub async fn insert(&self, layout: &Layout) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO layouts (id, kind, banner, faq, categories, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(layout.id)
        .bind(layout.kind)
        .bind(&layout.banner)
        .bind(&layout.faq)
        .bind(&layout.categories)
        .bind(layout.created_at)
        .bind(layout.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert layout", e))?;
        Ok(())
    }

    /// Replace the payload of an existing layout row.
    pub async fn update(&self, layout: &Layout) -> AppResult<()> {
        sqlx::query(
            "UPDATE layouts SET banner = $2, faq = $3, categories = $4, updated_at = $5
             WHERE id = $1",
        )
        .bind(layout.id)
        .bind(&layout.banner)
        .bind(&layout.faq)
        .bind(&layout.categories)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update layout", e))?;
        Ok(())
    }
}
