//! Order repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::order::Order;

/// Repository for purchase orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order.
    pub async fn insert(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        payment_info: Option<serde_json::Value>,
    ) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, user_id, course_id, payment_info, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(course_id)
        .bind(payment_info)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert order", e))
    }

    /// List all orders, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }
}

#[cfg(test)]
mod tests {
    const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

    /// Ownership is checked in the service before the insert; the store
    /// does not back it up with a constraint, so two concurrent purchases
    /// of the same course can both land. This pins the schema to that
    /// documented behavior: tightening it is a deliberate change.
    #[test]
    fn test_duplicate_purchase_not_enforced_by_schema() {
        let orders_ddl = table_ddl("orders");
        let ownership_ddl = table_ddl("user_courses");

        assert!(!orders_ddl.contains("UNIQUE"));
        assert!(!ownership_ddl.contains("UNIQUE"));
    }

    fn table_ddl(table: &str) -> &'static str {
        let start = SCHEMA
            .find(&format!("CREATE TABLE {table} ("))
            .unwrap_or_else(|| panic!("no DDL for table {table}"));
        let end = SCHEMA[start..].find(';').map(|i| start + i).unwrap();
        &SCHEMA[start..end]
    }
}
