//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use learnhub_core::config::auth::AuthConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;

use super::claims::Claims;

/// Validates JWT tokens against the per-kind signing secrets.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key for access tokens.
    access_key: DecodingKey,
    /// HMAC key for refresh tokens.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> AppResult<Claims> {
        self.decode_with(token, &self.access_key)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> AppResult<Claims> {
        self.decode_with(token, &self.refresh_key)
    }

    fn decode_with(&self, token: &str, key: &DecodingKey) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::jwt::encoder::JwtEncoder;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-secret".to_string(),
            refresh_token_secret: "refresh-secret".to_string(),
            activation_token_secret: "activation-secret".to_string(),
            access_ttl_minutes: 5,
            refresh_ttl_days: 3,
            activation_ttl_minutes: 5,
            password_min_length: 6,
        }
    }

    #[test]
    fn test_roundtrip_access_token() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let pair = encoder.generate_token_pair(user_id).unwrap();
        let claims = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).unwrap();
        // Signed with the refresh secret, so the access key must reject it.
        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        // Expired well past the 5 second clock-skew leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.access_token_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).unwrap();
        let mut tampered = pair.access_token;
        tampered.pop();
        tampered.push('x');
        assert!(decoder.decode_access_token(&tampered).is_err());
    }
}
