//! Cache backends and the read-through helper.
//!
//! Two [`CacheProvider`] implementations: Redis for deployment and an
//! in-memory store for tests and single-node setups. `CacheManager`
//! dispatches to whichever the configuration selects.
//!
//! [`CacheProvider`]: learnhub_core::traits::cache::CacheProvider

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod read_through;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
pub use read_through::read_through;
