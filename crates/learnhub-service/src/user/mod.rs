//! Account services.

pub mod service;

pub use service::{RegistrationTicket, UserService};
