use async_trait::async_trait;
use serde::Serialize;

/// What form-field image pickers get back and store in documents.
#[derive(Debug, Clone, Serialize)]
pub struct StoredMedia {
    pub url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStorageError {
    #[error("storage i/o error: {0}")]
    Io(String),
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(
        &self,
        name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError>;
}
