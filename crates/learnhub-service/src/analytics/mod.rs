//! Analytics services.

pub mod service;

pub use service::AnalyticsService;
