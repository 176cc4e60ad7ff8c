//! Core types shared by every LearnHub crate.
//!
//! Contains the unified error type, result alias, configuration schemas,
//! and the provider traits for external collaborators (cache, mail, media).

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
