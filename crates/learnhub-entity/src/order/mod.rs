//! Order aggregate.

pub mod model;

pub use model::Order;
