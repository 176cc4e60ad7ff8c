//! One repository per aggregate.

pub mod analytics;
pub mod course;
pub mod layout;
pub mod notification;
pub mod order;
pub mod user;
