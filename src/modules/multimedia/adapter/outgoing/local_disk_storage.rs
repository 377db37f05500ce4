use async_trait::async_trait;
use std::path::PathBuf;

use crate::modules::multimedia::application::ports::outgoing::media_storage::{
    MediaStorage, MediaStorageError, StoredMedia,
};

/// Writes uploads under `MEDIA_ROOT` and returns a URL below
/// `{public_base_url}/media/`. Serving the directory is the reverse
/// proxy's job.
pub struct LocalDiskStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalDiskStorage {
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl MediaStorage for LocalDiskStorage {
    async fn store(
        &self,
        name: &str,
        _content_type: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MediaStorageError::Io(e.to_string()))?;

        let path = self.root.join(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| MediaStorageError::Io(e.to_string()))?;

        Ok(StoredMedia {
            url: format!(
                "{}/media/{}",
                self.public_base_url.trim_end_matches('/'),
                name
            ),
        })
    }
}
