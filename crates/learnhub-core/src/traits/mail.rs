//! Mail transport trait for pluggable delivery backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A rendered transactional message ready for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Trait for transactional mail backends.
#[async_trait]
pub trait MailTransport: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a single message.
    async fn send(&self, message: &MailMessage) -> AppResult<()>;
}
