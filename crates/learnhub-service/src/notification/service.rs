//! Admin-facing notification feed.

use uuid::Uuid;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_database::repositories::notification::NotificationRepository;
use learnhub_entity::notification::Notification;

/// Notification service.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: NotificationRepository,
}

impl NotificationService {
    /// Create a new notification service.
    pub fn new(notifications: NotificationRepository) -> Self {
        Self { notifications }
    }

    /// List all notifications, newest first.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.notifications.find_all().await
    }

    /// Mark a notification as read, returning the refreshed feed.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<Vec<Notification>> {
        self.notifications
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        self.notifications.mark_read(id).await?;
        self.notifications.find_all().await
    }
}
