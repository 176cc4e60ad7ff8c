//! Authentication: JWT issuance, password hashing, account activation
//! and the cookie-backed session layer.

pub mod activation;
pub mod jwt;
pub mod password;
pub mod session;

pub use activation::{ActivationCodec, PendingAccount};
pub use jwt::{JwtDecoder, JwtEncoder, TokenPair};
pub use password::PasswordHasher;
pub use session::SessionManager;
