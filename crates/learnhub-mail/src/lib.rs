//! Transactional mail delivery.
//!
//! Messages are rendered by [`templates`] and handed to a
//! [`MailTransport`] backend: an HTTP relay for deployment or a no-op
//! transport for tests and local runs.
//!
//! [`MailTransport`]: learnhub_core::traits::mail::MailTransport

pub mod http;
pub mod manager;
pub mod noop;
pub mod templates;

pub use manager::MailManager;
