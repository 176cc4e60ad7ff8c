//! Admin notification services.

pub mod service;

pub use service::NotificationService;
