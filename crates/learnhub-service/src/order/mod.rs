//! Purchase order services.

pub mod service;

pub use service::OrderService;
