//! HTTP handlers.

pub mod analytics;
pub mod auth;
pub mod course;
pub mod health;
pub mod layout;
pub mod notification;
pub mod order;
pub mod user;
