//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduler and maintenance job settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background scheduler runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the notification sweep (seconds-resolution).
    #[serde(default = "default_sweep_schedule")]
    pub sweep_schedule: String,
    /// Read notifications older than this many days are deleted.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sweep_schedule: default_sweep_schedule(),
            notification_retention_days: default_retention_days(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_schedule() -> String {
    // Every day at midnight.
    "0 0 0 * * *".to_string()
}

fn default_retention_days() -> i64 {
    30
}
