//! Authentication and token configuration.

use serde::{Deserialize, Serialize};

/// JWT and password settings.
///
/// Access, refresh and activation tokens are signed with separate secrets
/// so a token of one kind can never be replayed as another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for access tokens.
    pub access_token_secret: String,
    /// HMAC secret for refresh tokens.
    pub refresh_token_secret: String,
    /// HMAC secret for account activation tokens.
    pub activation_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Activation token TTL in minutes.
    #[serde(default = "default_activation_ttl")]
    pub activation_ttl_minutes: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
}

fn default_access_ttl() -> u64 {
    5
}

fn default_refresh_ttl() -> u64 {
    3
}

fn default_activation_ttl() -> u64 {
    5
}

fn default_password_min_length() -> usize {
    6
}
