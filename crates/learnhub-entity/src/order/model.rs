//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A course purchase. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Purchasing account.
    pub user_id: Uuid,
    /// Purchased course.
    pub course_id: Uuid,
    /// Opaque payment gateway metadata.
    pub payment_info: Option<serde_json::Value>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}
