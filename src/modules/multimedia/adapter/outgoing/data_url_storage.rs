use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::modules::multimedia::application::ports::outgoing::media_storage::{
    MediaStorage, MediaStorageError, StoredMedia,
};

/// Fallback when no media directory is configured: the "upload" becomes
/// an inline data URL the admin panel stores directly in the document,
/// so image picking keeps working with zero hosting setup.
#[derive(Default)]
pub struct DataUrlStorage;

impl DataUrlStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaStorage for DataUrlStorage {
    async fn store(
        &self,
        _name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError> {
        Ok(StoredMedia {
            url: format!("data:{};base64,{}", content_type, STANDARD.encode(bytes)),
        })
    }
}
