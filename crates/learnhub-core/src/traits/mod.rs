//! Provider traits for external collaborators.

pub mod cache;
pub mod mail;
pub mod media;

pub use cache::CacheProvider;
pub use mail::{MailMessage, MailTransport};
pub use media::{MediaAsset, MediaStore};
