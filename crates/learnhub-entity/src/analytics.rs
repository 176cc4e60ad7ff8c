//! Analytics data shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single month bucket as returned by the grouped count query.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyCount {
    /// First instant of the month (from `date_trunc('month', ...)`).
    pub month: DateTime<Utc>,
    /// Rows created in that month.
    pub count: i64,
}

/// One labelled month in the last-12-months series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthData {
    /// Human-readable month label, e.g. `"31 Aug 2026"`.
    pub month: String,
    /// Rows created in that month.
    pub count: i64,
}

/// The last-12-months series served by the analytics endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeries {
    pub last_12_months: Vec<MonthData>,
}
