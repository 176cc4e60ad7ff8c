//! Notification aggregate.

pub mod model;
pub mod status;

pub use model::Notification;
pub use status::NotificationStatus;
