//! In-memory cache implementation using the moka crate.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;

use learnhub_core::config::cache::MemoryCacheConfig;
use learnhub_core::result::AppResult;
use learnhub_core::traits::cache::CacheProvider;

/// A cached value together with its optional expiry.
///
/// Entries written through `set_persistent` carry no TTL and live until
/// evicted by capacity pressure, mirroring Redis keys written without EX.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    ttl: Option<Duration>,
}

/// Per-entry expiry policy driven by the TTL stored on each entry.
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        entry.ttl
    }
}

/// In-memory cache provider using moka.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    /// The underlying moka cache.
    cache: Cache<String, CacheEntry>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self { cache }
    }

    async fn insert(&self, key: &str, value: &str, ttl: Option<Duration>) {
        self.cache
            .insert(
                key.to_string(),
                CacheEntry {
                    value: value.to_string(),
                    ttl,
                },
            )
            .await;
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.insert(key, value, Some(ttl)).await;
        Ok(())
    }

    async fn set_persistent(&self, key: &str, value: &str) -> AppResult<()> {
        self.insert(key, value, None).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.remove(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnhub_core::config::cache::MemoryCacheConfig;

    fn make_provider() -> MemoryCacheProvider {
        let config = MemoryCacheConfig { max_capacity: 1000 };
        MemoryCacheProvider::new(&config)
    }

    #[tokio::test]
    async fn test_set_get() {
        let provider = make_provider();
        provider
            .set("key1", "value1", Duration::from_secs(60))
            .await
            .unwrap();
        let val = provider.get("key1").await.unwrap();
        assert_eq!(val, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_delete() {
        let provider = make_provider();
        provider
            .set("key2", "value2", Duration::from_secs(60))
            .await
            .unwrap();
        provider.delete("key2").await.unwrap();
        let val = provider.get("key2").await.unwrap();
        assert_eq!(val, None);
    }

    #[tokio::test]
    async fn test_ttl_expiry() {
        let provider = make_provider();
        provider
            .set("short", "gone", Duration::from_millis(10))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        let val = provider.get("short").await.unwrap();
        assert_eq!(val, None);
    }

    #[tokio::test]
    async fn test_persistent_outlives_short_ttl() {
        let provider = make_provider();
        provider.set_persistent("mirror", "profile").await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        let val = provider.get("mirror").await.unwrap();
        assert_eq!(val, Some("profile".to_string()));
    }

    #[tokio::test]
    async fn test_exists() {
        let provider = make_provider();
        assert!(!provider.exists("absent").await.unwrap());
        provider.set_persistent("present", "x").await.unwrap();
        assert!(provider.exists("present").await.unwrap());
    }

    #[tokio::test]
    async fn test_json_roundtrip() {
        let provider = make_provider();
        let data = serde_json::json!({"name": "test", "count": 42});
        provider
            .set_json("json_key", &data, Duration::from_secs(60))
            .await
            .unwrap();
        let result: Option<serde_json::Value> = provider.get_json("json_key").await.unwrap();
        assert_eq!(result, Some(data));
    }

    #[tokio::test]
    async fn test_flush_all() {
        let provider = make_provider();
        provider.set_persistent("a", "1").await.unwrap();
        provider.set_persistent("b", "2").await.unwrap();
        provider.flush_all().await.unwrap();
        // invalidate_all is lazy; a fresh get must still miss.
        assert_eq!(provider.get("a").await.unwrap(), None);
        assert_eq!(provider.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_health_check() {
        let provider = make_provider();
        assert!(provider.health_check().await.unwrap());
    }
}
