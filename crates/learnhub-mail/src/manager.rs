//! Mail manager that dispatches to the configured transport.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use learnhub_core::config::mail::MailConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::mail::{MailMessage, MailTransport};

/// Mail manager that wraps the configured transport.
#[derive(Debug, Clone)]
pub struct MailManager {
    /// The inner mail transport.
    inner: Arc<dyn MailTransport>,
}

impl MailManager {
    /// Create a new mail manager from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        let inner: Arc<dyn MailTransport> = match config.provider.as_str() {
            "http" => {
                info!(base_url = %config.base_url, "Initializing HTTP mail transport");
                Arc::new(crate::http::HttpMailClient::new(config)?)
            }
            "noop" => {
                info!("Initializing no-op mail transport");
                Arc::new(crate::noop::NoopMailTransport)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown mail provider: '{other}'. Supported: http, noop"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a mail manager from an existing transport (for testing).
    pub fn from_transport(transport: Arc<dyn MailTransport>) -> Self {
        Self { inner: transport }
    }
}

#[async_trait]
impl MailTransport for MailManager {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        self.inner.send(message).await
    }
}
