//! `CacheManager`: the configured provider behind one handle.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use learnhub_core::config::cache::CacheConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::cache::CacheProvider;

/// Dispatches cache calls to the provider the configuration selected.
///
/// Services hold an `Arc<CacheManager>` and never see the concrete
/// backend; tests swap in the memory provider via [`from_provider`].
///
/// [`from_provider`]: CacheManager::from_provider
#[derive(Debug, Clone)]
pub struct CacheManager {
    inner: Arc<dyn CacheProvider>,
}

impl CacheManager {
    /// Connect the configured backend and wrap it.
    pub async fn new(config: &CacheConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis cache provider");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Ok(Self::from_provider(Arc::new(
                    crate::redis::RedisCacheProvider::new(client),
                )))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory cache provider");
                Ok(Self::from_provider(Arc::new(
                    crate::memory::MemoryCacheProvider::new(&config.memory),
                )))
            }
            other => Err(AppError::configuration(format!(
                "Unknown cache provider: '{other}'. Supported: memory, redis"
            ))),
        }
    }

    /// Wrap an already-built provider.
    pub fn from_provider(provider: Arc<dyn CacheProvider>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl CacheProvider for CacheManager {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.inner.set(key, value, ttl).await
    }

    async fn set_persistent(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set_persistent(key, value).await
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.inner.flush_all().await
    }
}
