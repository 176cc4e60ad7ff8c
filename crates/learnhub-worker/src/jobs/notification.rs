//! Notification retention sweep.
//!
//! Deletes read notifications older than the retention window. Unread
//! notifications are kept forever.

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info};

use learnhub_core::result::AppResult;
use learnhub_database::repositories::notification::NotificationRepository;

/// The daily notification sweep.
#[derive(Debug, Clone)]
pub struct NotificationSweepJob {
    notifications: NotificationRepository,
    retention_days: u32,
}

impl NotificationSweepJob {
    /// Create a new sweep job.
    pub fn new(notifications: NotificationRepository, retention_days: u32) -> Self {
        Self {
            notifications,
            retention_days,
        }
    }

    /// Run the sweep against a fixed instant, returning the delete count.
    pub async fn run_at(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let cutoff = now - Duration::days(self.retention_days as i64);
        let deleted = self.notifications.delete_read_before(cutoff).await?;
        info!(deleted, retention_days = self.retention_days, "Notification sweep finished");
        Ok(deleted)
    }

    /// Run the sweep, logging failures instead of propagating them. This
    /// is the entry point used from the cron schedule.
    pub async fn run(&self) {
        if let Err(e) = self.run_at(Utc::now()).await {
            error!("Notification sweep failed: {e}");
        }
    }
}
