//! Session lifecycle built on JWT cookies and the cache mirror.
//!
//! A login writes the full profile into the cache keyed by account id and
//! hands the client an access/refresh token pair. Authorization decodes
//! the access token and reads the mirror; an account with no mirror entry
//! is treated as logged out even if its token is still valid.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use learnhub_cache::keys;
use learnhub_cache::provider::CacheManager;
use learnhub_core::config::auth::AuthConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::cache::CacheProvider;
use learnhub_entity::user::UserProfile;

use crate::jwt::{JwtDecoder, JwtEncoder, TokenPair};

/// Manages login sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    cache: Arc<CacheManager>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(config: &AuthConfig, cache: Arc<CacheManager>) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            cache,
        }
    }

    /// Opens a session: mirrors the profile and issues a token pair.
    pub async fn issue(&self, profile: &UserProfile) -> AppResult<TokenPair> {
        let pair = self.encoder.generate_token_pair(profile.user.id)?;
        self.mirror(profile).await?;
        debug!(user_id = %profile.user.id, "Session issued");
        Ok(pair)
    }

    /// Resolves an access token to the mirrored profile.
    pub async fn authorize(&self, access_token: &str) -> AppResult<UserProfile> {
        let claims = self.decoder.decode_access_token(access_token)?;
        self.lookup(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Please login to access this resource"))
    }

    /// Exchanges a refresh token for a fresh pair, re-mirroring the profile.
    ///
    /// The old refresh token is not invalidated; it stays usable until it
    /// expires on its own.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(TokenPair, UserProfile)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;
        let profile = self
            .lookup(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Could not refresh token"))?;

        let pair = self.encoder.generate_token_pair(profile.user.id)?;
        self.mirror(&profile).await?;
        Ok((pair, profile))
    }

    /// Closes the session by dropping the cache mirror.
    pub async fn revoke(&self, user_id: Uuid) -> AppResult<()> {
        self.cache.delete(&keys::user_by_id(user_id)).await?;
        debug!(user_id = %user_id, "Session revoked");
        Ok(())
    }

    /// Writes the profile mirror without expiry.
    pub async fn mirror(&self, profile: &UserProfile) -> AppResult<()> {
        self.cache
            .set_json_persistent(&keys::user_by_id(profile.user.id), profile)
            .await
    }

    async fn lookup(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        self.cache.get_json(&keys::user_by_id(user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use learnhub_core::config::cache::MemoryCacheConfig;
    use learnhub_core::error::ErrorKind;
    use learnhub_entity::user::{User, UserRole};

    fn test_manager() -> SessionManager {
        let config = AuthConfig {
            access_token_secret: "access-secret".to_string(),
            refresh_token_secret: "refresh-secret".to_string(),
            activation_token_secret: "activation-secret".to_string(),
            access_ttl_minutes: 5,
            refresh_ttl_days: 3,
            activation_ttl_minutes: 5,
            password_min_length: 6,
        };
        let provider = learnhub_cache::memory::MemoryCacheProvider::new(&MemoryCacheConfig {
            max_capacity: 100,
        });
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));
        SessionManager::new(&config, cache)
    }

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            User {
                id: Uuid::new_v4(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: Some("$argon2id$...".to_string()),
                avatar_public_id: None,
                avatar_url: None,
                role: UserRole::User,
                is_verified: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            vec![Uuid::new_v4()],
        )
    }

    #[tokio::test]
    async fn test_issue_then_authorize() {
        let manager = test_manager();
        let profile = sample_profile();

        let pair = manager.issue(&profile).await.unwrap();
        let resolved = manager.authorize(&pair.access_token).await.unwrap();
        assert_eq!(resolved.user.id, profile.user.id);
        assert_eq!(resolved.courses, profile.courses);
        // The mirror drops the hash on serialization.
        assert!(resolved.user.password_hash.is_none());
    }

    #[tokio::test]
    async fn test_authorize_after_revoke_fails() {
        let manager = test_manager();
        let profile = sample_profile();

        let pair = manager.issue(&profile).await.unwrap();
        manager.revoke(profile.user.id).await.unwrap();

        let err = manager.authorize(&pair.access_token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Please login to access this resource");
    }

    #[tokio::test]
    async fn test_refresh_returns_new_pair() {
        let manager = test_manager();
        let profile = sample_profile();

        let pair = manager.issue(&profile).await.unwrap();
        let (new_pair, resolved) = manager.refresh(&pair.refresh_token).await.unwrap();
        assert_eq!(resolved.user.id, profile.user.id);
        assert!(manager.authorize(&new_pair.access_token).await.is_ok());
        // The original refresh token is still accepted.
        assert!(manager.refresh(&pair.refresh_token).await.is_ok());
    }

    #[tokio::test]
    async fn test_access_token_rejected_as_refresh() {
        let manager = test_manager();
        let profile = sample_profile();

        let pair = manager.issue(&profile).await.unwrap();
        assert!(manager.refresh(&pair.access_token).await.is_err());
    }
}
