//! Layout aggregate.

pub mod model;

pub use model::{Banner, Category, FaqItem, Layout, LayoutKind};
