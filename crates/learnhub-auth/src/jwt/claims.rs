//! JWT claim payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by access and refresh tokens.
///
/// Only the account id travels in the token; profile data lives in the
/// cache mirror keyed by that id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id the token was issued to.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
