//! Media manager that dispatches to the configured store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use learnhub_core::config::media::MediaConfig;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::media::{MediaAsset, MediaStore};

/// Media manager that wraps the configured image host backend.
#[derive(Debug, Clone)]
pub struct MediaManager {
    /// The inner media store.
    inner: Arc<dyn MediaStore>,
}

impl MediaManager {
    /// Create a new media manager from configuration.
    pub fn new(config: &MediaConfig) -> AppResult<Self> {
        let inner: Arc<dyn MediaStore> = match config.provider.as_str() {
            "http" => {
                info!(base_url = %config.base_url, "Initializing HTTP media store");
                Arc::new(crate::http::HttpMediaClient::new(config)?)
            }
            "memory" => {
                info!("Initializing in-memory media store");
                Arc::new(crate::memory::MemoryMediaStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown media provider: '{other}'. Supported: http, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a media manager from an existing store (for testing).
    pub fn from_store(store: Arc<dyn MediaStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl MediaStore for MediaManager {
    async fn upload(&self, folder: &str, data_uri: &str) -> AppResult<MediaAsset> {
        self.inner.upload(folder, data_uri).await
    }

    async fn destroy(&self, public_id: &str) -> AppResult<()> {
        self.inner.destroy(public_id).await
    }
}
