//! Transactional mail configuration.

use serde::{Deserialize, Serialize};

/// Mail transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Mail provider type: `"http"` or `"noop"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the HTTP mail API.
    #[serde(default)]
    pub base_url: String,
    /// API username for the mail service.
    #[serde(default)]
    pub username: String,
    /// API password or key for the mail service.
    #[serde(default)]
    pub password: String,
    /// Sender address placed in outgoing messages.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: String::new(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "noop".to_string()
}

fn default_from_address() -> String {
    "no-reply@learnhub.local".to_string()
}

fn default_timeout() -> u64 {
    10
}
