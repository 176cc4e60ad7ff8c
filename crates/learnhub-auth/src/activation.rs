//! Account activation tokens.
//!
//! Registration does not write to the database. The pending account is
//! sealed inside a short-lived JWT together with a 4-digit code that is
//! mailed to the user; activation presents both and only then is the
//! account created.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use learnhub_core::config::auth::AuthConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;

/// Account data held in the activation token until the code is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAccount {
    /// Display name.
    pub name: String,
    /// Email address, already normalized to lowercase.
    pub email: String,
    /// Argon2id hash of the chosen password.
    pub password_hash: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ActivationClaims {
    #[serde(flatten)]
    account: PendingAccount,
    code: String,
    iat: i64,
    exp: i64,
}

/// A freshly issued activation token and its confirmation code.
#[derive(Debug, Clone)]
pub struct ActivationToken {
    /// Signed JWT returned to the client.
    pub token: String,
    /// 4-digit code mailed to the user.
    pub code: String,
}

/// Issues and verifies activation tokens.
#[derive(Clone)]
pub struct ActivationCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl std::fmt::Debug for ActivationCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationCodec")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl ActivationCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            encoding_key: EncodingKey::from_secret(config.activation_token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.activation_token_secret.as_bytes()),
            validation,
            ttl_minutes: config.activation_ttl_minutes as i64,
        }
    }

    /// Seals a pending account into a token with a fresh 4-digit code.
    pub fn issue(&self, account: PendingAccount) -> AppResult<ActivationToken> {
        let code = format!("{}", rand::rng().random_range(1000..10000));
        let now = Utc::now();
        let claims = ActivationClaims {
            account,
            code: code.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::minutes(self.ttl_minutes)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode activation token: {e}")))?;

        Ok(ActivationToken { token, code })
    }

    /// Verifies the token and code, returning the pending account.
    pub fn verify(&self, token: &str, code: &str) -> AppResult<PendingAccount> {
        let data = decode::<ActivationClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Activation token has expired")
                }
                _ => AppError::unauthorized("Invalid activation token"),
            })?;

        if data.claims.code != code {
            return Err(AppError::validation("Invalid activation code"));
        }

        Ok(data.claims.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_core::error::ErrorKind;

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

    fn pending() -> PendingAccount {
        PendingAccount {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = ActivationCodec::new(&test_config());
        let issued = codec.issue(pending()).unwrap();
        assert_eq!(issued.code.len(), 4);

        let account = codec.verify(&issued.token, &issued.code).unwrap();
        assert_eq!(account, pending());
    }

    #[test]
    fn test_wrong_code_rejected() {
        let codec = ActivationCodec::new(&test_config());
        let issued = codec.issue(pending()).unwrap();
        let wrong = if issued.code == "0000" { "0001" } else { "0000" };

        let err = codec.verify(&issued.token, wrong).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid activation code");
    }

    #[test]
    fn test_garbage_token_rejected() {
        let codec = ActivationCodec::new(&test_config());
        let err = codec.verify("not-a-token", "1234").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
