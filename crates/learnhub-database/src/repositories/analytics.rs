//! Analytics queries: per-month creation counts.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::analytics::MonthlyCount;

/// The aggregates that expose a monthly creation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEntity {
    Users,
    Courses,
    Orders,
}

impl AnalyticsEntity {
    fn table(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Courses => "courses",
            Self::Orders => "orders",
        }
    }
}

/// Repository for analytics scans.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    /// Create a new analytics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count rows created per calendar month since the given instant.
    ///
    /// One grouped scan per call; months with no rows are absent from the
    /// result and filled in by the caller.
    pub async fn monthly_counts(
        &self,
        entity: AnalyticsEntity,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<MonthlyCount>> {
        // Table names come from a closed enum, never from input.
        let sql = format!(
            "SELECT date_trunc('month', created_at) AS month, COUNT(*) AS count
             FROM {} WHERE created_at >= $1 GROUP BY 1 ORDER BY 1",
            entity.table()
        );

        sqlx::query_as::<_, MonthlyCount>(&sql)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load monthly counts", e)
            })
    }
}
