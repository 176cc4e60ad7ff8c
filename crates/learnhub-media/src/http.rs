//! HTTP client for the external image host.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use learnhub_core::config::media::MediaConfig;
use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::traits::media::{MediaAsset, MediaStore};

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    file: &'a str,
    folder: &'a str,
    api_key: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Serialize)]
struct DestroyRequest<'a> {
    public_id: &'a str,
    api_key: &'a str,
}

/// Media store backed by the image host's upload API.
#[derive(Debug, Clone)]
pub struct HttpMediaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl HttpMediaClient {
    /// Build a client from configuration.
    pub fn new(config: &MediaConfig) -> AppResult<Self> {
        if config.base_url.is_empty() {
            return Err(AppError::configuration(
                "Media base_url is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Media, "Failed to build media HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }
}

#[async_trait]
impl MediaStore for HttpMediaClient {
    async fn upload(&self, folder: &str, data_uri: &str) -> AppResult<MediaAsset> {
        let url = format!("{}/image/upload", self.base_url);
        let payload = UploadRequest {
            file: data_uri,
            folder,
            api_key: &self.api_key,
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Media, "Media upload request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::new(
                ErrorKind::Media,
                format!("Media host returned {status} on upload"),
            ));
        }

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Media, "Invalid upload response from media host", e)
        })?;

        debug!(folder, public_id = %uploaded.public_id, "Image uploaded");
        Ok(MediaAsset {
            public_id: uploaded.public_id,
            url: uploaded.secure_url,
        })
    }

    async fn destroy(&self, public_id: &str) -> AppResult<()> {
        let url = format!("{}/image/destroy", self.base_url);
        let payload = DestroyRequest {
            public_id,
            api_key: &self.api_key,
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Media, "Media destroy request failed", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::new(
                ErrorKind::Media,
                format!("Media host returned {status} on destroy"),
            ));
        }

        debug!(public_id, "Image destroyed");
        Ok(())
    }
}
