//! Media store trait for the external image host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A stored media object on the image host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Host-assigned identifier used for later deletion.
    pub public_id: String,
    /// Public delivery URL.
    pub url: String,
}

/// Trait for image host backends.
///
/// Uploads accept base64 data URIs (`data:image/png;base64,...`) as sent
/// by the web client.
#[async_trait]
pub trait MediaStore: Send + Sync + std::fmt::Debug + 'static {
    /// Upload an image into the given folder.
    async fn upload(&self, folder: &str, data_uri: &str) -> AppResult<MediaAsset>;

    /// Delete an image by its public id.
    async fn destroy(&self, public_id: &str) -> AppResult<()>;
}
