//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_entity::notification::{Notification, NotificationStatus};

/// Repository for admin-facing notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new unread notification.
    pub async fn insert(
        &self,
        user_id: Uuid,
        title: &str,
        message: &str,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, title, message, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(message)
        .bind(NotificationStatus::Unread)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert notification", e))
    }

    /// Find a notification by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// List all notifications, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
            })
    }

    /// Mark a notification as read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(NotificationStatus::Read)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
            })?;
        Ok(())
    }

    /// Delete read notifications created before the cutoff.
    ///
    /// This is exactly the sweep predicate: unread notifications are never
    /// deleted, regardless of age.
    pub async fn delete_read_before(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM notifications WHERE status = 'read' AND created_at < $1",
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to sweep notifications", e)
        })?;
        Ok(result.rows_affected())
    }
}
