//! Cookie-backed session layer.

pub mod manager;

pub use manager::SessionManager;
