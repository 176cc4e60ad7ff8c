//! HTTP mail relay client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use learnhub_core::config::mail::MailConfig;
use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::traits::mail::{MailMessage, MailTransport};

/// Outgoing payload for the relay's send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Mail transport that posts messages to an HTTP relay API.
#[derive(Debug, Clone)]
pub struct HttpMailClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    from_address: String,
}

impl HttpMailClient {
    /// Build a client from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        if config.base_url.is_empty() {
            return Err(AppError::configuration(
                "Mail base_url is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Mail, "Failed to build mail HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl MailTransport for HttpMailClient {
    async fn send(&self, message: &MailMessage) -> AppResult<()> {
        let url = format!("{}/messages", self.base_url);
        let payload = SendRequest {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Mail, "Mail relay request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::new(
                ErrorKind::Mail,
                format!("Mail relay returned {status}: {body}"),
            ));
        }

        debug!(to = %message.to, subject = %message.subject, "Mail delivered");
        Ok(())
    }
}
