//! No-op mail transport for tests and local development.

use async_trait::async_trait;
use tracing::info;

use learnhub_core::result::AppResult;
use learnhub_core::traits::mail::{MailMessage, MailTransport};

/// Transport that logs messages instead of delivering them.
#[derive(Debug, Clone, Copy)]
pub struct NoopMailTransport;

#[async_trait]
impl MailTransport for NoopMailTransport {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        info!(to = %message.to, subject = %message.subject, "Mail suppressed (noop transport)");
        Ok(())
    }
}
