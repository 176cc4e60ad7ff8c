//! Notification entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::NotificationStatus;

/// An admin-facing event notification.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The account that triggered the event.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Read state.
    pub status: NotificationStatus,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has been read.
    pub fn is_read(&self) -> bool {
        self.status == NotificationStatus::Read
    }

    /// The sweep predicate: read notifications older than the retention
    /// window are deleted. Unread notifications are never swept.
    pub fn is_sweepable(&self, now: DateTime<Utc>, retention_days: i64) -> bool {
        self.is_read() && self.created_at < now - Duration::days(retention_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(status: NotificationStatus, age_days: i64) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "New Order".to_string(),
            message: "You have a new order from Rust 101".to_string(),
            status,
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn test_old_read_notification_is_sweepable() {
        let n = notification(NotificationStatus::Read, 31);
        assert!(n.is_sweepable(Utc::now(), 30));
    }

    #[test]
    fn test_recent_read_notification_is_kept() {
        let n = notification(NotificationStatus::Read, 29);
        assert!(!n.is_sweepable(Utc::now(), 30));
    }

    #[test]
    fn test_unread_notification_is_never_swept() {
        let n = notification(NotificationStatus::Unread, 365);
        assert!(!n.is_sweepable(Utc::now(), 30));
    }
}
