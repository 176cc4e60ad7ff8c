//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum request body size in megabytes.
    #[serde(default = "default_max_body_mb")]
    pub max_body_mb: usize,
    /// CORS settings.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// CORS settings for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. A single `"*"` entry allows any origin
    /// (credentials are then disabled).
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_mb() -> usize {
    50
}

fn default_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}
