//! Image host integration.
//!
//! Avatars, course thumbnails and layout banners are uploaded as base64
//! data URIs and stored on an external image host. The [`MediaStore`]
//! trait has an HTTP backend for deployment and an in-memory backend for
//! tests.
//!
//! [`MediaStore`]: learnhub_core::traits::media::MediaStore

pub mod http;
pub mod manager;
pub mod memory;

pub use manager::MediaManager;
