//! Read-through helper for the course cache paths.

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use learnhub_core::result::AppResult;
use learnhub_core::traits::cache::CacheProvider;

use crate::provider::CacheManager;

/// Fetch a value from the cache, falling back to `load` on a miss.
///
/// On a miss the loaded value is written back without expiry, so the
/// entry stays live until it is explicitly deleted.
pub async fn read_through<T, F, Fut>(cache: &CacheManager, key: &str, load: F) -> AppResult<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
    F: FnOnce() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    if let Some(cached) = cache.get_json::<T>(key).await? {
        debug!(key, "Cache hit");
        return Ok(cached);
    }

    debug!(key, "Cache miss, loading from source");
    let value = load().await?;
    cache.set_json_persistent(key, &value).await?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use learnhub_core::config::cache::MemoryCacheConfig;

    fn make_cache() -> CacheManager {
        let config = MemoryCacheConfig { max_capacity: 100 };
        let provider = crate::memory::MemoryCacheProvider::new(&config);
        CacheManager::from_provider(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let cache = make_cache();
        let loads = Arc::new(AtomicUsize::new(0));

        let loads_clone = Arc::clone(&loads);
        let first: String = read_through(&cache, "greeting", || async move {
            loads_clone.fetch_add(1, Ordering::SeqCst);
            Ok("hello".to_string())
        })
        .await
        .unwrap();
        assert_eq!(first, "hello");

        // Second read is served from the cache even though the source
        // now returns different data.
        let loads_clone = Arc::clone(&loads);
        let second: String = read_through(&cache, "greeting", || async move {
            loads_clone.fetch_add(1, Ordering::SeqCst);
            Ok("changed".to_string())
        })
        .await
        .unwrap();
        assert_eq!(second, "hello");
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_reload_after_delete() {
        let cache = make_cache();

        let _: String = read_through(&cache, "entry", || async { Ok("v1".to_string()) })
            .await
            .unwrap();
        cache.delete("entry").await.unwrap();

        let reloaded: String = read_through(&cache, "entry", || async { Ok("v2".to_string()) })
            .await
            .unwrap();
        assert_eq!(reloaded, "v2");
    }
}
