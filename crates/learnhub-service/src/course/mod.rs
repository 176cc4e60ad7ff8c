//! Course catalog services.

pub mod service;

pub use service::{CourseInput, CourseService, SectionInput};
