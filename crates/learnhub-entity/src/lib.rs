//! Domain entities for LearnHub.
//!
//! One module per aggregate: serde + sqlx `FromRow` models plus the
//! composite views that are cached and returned over the API.

pub mod analytics;
pub mod course;
pub mod layout;
pub mod notification;
pub mod order;
pub mod user;
