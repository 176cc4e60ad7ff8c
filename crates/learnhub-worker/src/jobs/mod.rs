//! Scheduled job implementations.

pub mod notification;

pub use notification::NotificationSweepJob;
