//! Cron scheduler for periodic maintenance tasks.

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::info;

use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;

use crate::jobs::NotificationSweepJob;

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new() -> AppResult<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self { scheduler })
    }

    /// Register the notification sweep on the given cron schedule.
    pub async fn register_notification_sweep(
        &self,
        job: NotificationSweepJob,
        schedule: &str,
    ) -> AppResult<()> {
        let cron_job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let job = job.clone();
            Box::pin(async move {
                job.run().await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create notification_sweep schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add notification_sweep schedule: {e}"))
        })?;

        info!(schedule, "Registered: notification_sweep");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> AppResult<()> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> AppResult<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        info!("Cron scheduler shut down");
        Ok(())
    }
}
