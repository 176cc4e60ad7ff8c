//! # learnhub-api
//!
//! HTTP API layer for LearnHub built on Axum.
//!
//! Provides all REST endpoints, cookie-based auth extractors, DTOs,
//! middleware (CORS, tracing, body limits) and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
