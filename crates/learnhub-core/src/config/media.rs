//! Media host configuration.

use serde::{Deserialize, Serialize};

/// Image host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Media provider type: `"http"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the media host API.
    #[serde(default)]
    pub base_url: String,
    /// API key for the media host.
    #[serde(default)]
    pub api_key: String,
    /// API secret for the media host.
    #[serde(default)]
    pub api_secret: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_url: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_timeout() -> u64 {
    30
}
