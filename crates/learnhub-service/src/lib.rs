//! Business logic services.
//!
//! Each service owns one domain area and composes repositories, the
//! cache, the mailer and the media host. Handlers stay thin: they parse
//! the request, call one service method and shape the response.

pub mod analytics;
pub mod context;
pub mod course;
pub mod layout;
pub mod notification;
pub mod order;
pub mod user;

pub use context::RequestContext;
