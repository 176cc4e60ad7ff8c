//! Site layout services.

pub mod service;

pub use service::{LayoutInput, LayoutService};
