//! In-memory media store for tests and local development.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use dashmap::DashMap;
use uuid::Uuid;

use learnhub_core::error::{AppError, ErrorKind};
use learnhub_core::result::AppResult;
use learnhub_core::traits::media::{MediaAsset, MediaStore};

/// Media store that validates uploads and keeps them in memory.
#[derive(Debug, Default)]
pub struct MemoryMediaStore {
    /// Map of public id to decoded image bytes.
    objects: DashMap<String, Vec<u8>>,
}

impl MemoryMediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Split a `data:<mime>;base64,<payload>` URI and decode the payload.
fn decode_data_uri(data_uri: &str) -> AppResult<Vec<u8>> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| AppError::validation("Expected a base64 data URI"))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AppError::validation("Malformed data URI"))?;

    if !header.ends_with(";base64") {
        return Err(AppError::validation("Data URI must be base64 encoded"));
    }

    STANDARD.decode(payload).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "Invalid base64 payload", e)
    })
}

#[async_trait]
impl MediaStore for MemoryMediaStore {
    async fn upload(&self, folder: &str, data_uri: &str) -> AppResult<MediaAsset> {
        let bytes = decode_data_uri(data_uri)?;
        let public_id = format!("{folder}/{}", Uuid::new_v4());
        let url = format!("memory://{public_id}");
        self.objects.insert(public_id.clone(), bytes);
        Ok(MediaAsset { public_id, url })
    }

    async fn destroy(&self, public_id: &str) -> AppResult<()> {
        self.objects.remove(public_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[tokio::test]
    async fn test_upload_and_destroy() {
        let store = MemoryMediaStore::new();
        let asset = store.upload("avatars", PNG_URI).await.unwrap();
        assert!(asset.public_id.starts_with("avatars/"));
        assert!(asset.url.starts_with("memory://avatars/"));
        assert_eq!(store.len(), 1);

        store.destroy(&asset.public_id).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_plain_base64() {
        let store = MemoryMediaStore::new();
        let err = store.upload("avatars", "aGVsbG8=").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_rejects_non_base64_uri() {
        let store = MemoryMediaStore::new();
        let err = store
            .upload("avatars", "data:image/png,rawbytes")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_decode_data_uri() {
        let bytes = decode_data_uri("data:text/plain;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }
}
