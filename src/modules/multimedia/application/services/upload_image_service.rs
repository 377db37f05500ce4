use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::multimedia::application::domain::policies::UploadPolicy;
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    UploadImageError, UploadImageUseCase, UploadInput,
};
use crate::modules::multimedia::application::ports::outgoing::media_storage::{
    MediaStorage, StoredMedia,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UploadImageService {
    policy: UploadPolicy,
    storage: Arc<dyn MediaStorage + Send + Sync>,
}

impl UploadImageService {
    pub fn new(policy: UploadPolicy, storage: Arc<dyn MediaStorage + Send + Sync>) -> Self {
        Self { policy, storage }
    }
}

#[async_trait]
impl UploadImageUseCase for UploadImageService {
    async fn execute(&self, input: UploadInput) -> Result<StoredMedia, UploadImageError> {
        let ext = self
            .policy
            .check(&input.content_type, input.bytes.len())
            .map_err(UploadImageError::Policy)?;

        // Stored names are server-generated; the client filename is not
        // trusted for anything.
        let name = format!("{}.{}", Uuid::new_v4(), ext);

        self.storage
            .store(&name, &input.content_type, &input.bytes)
            .await
            .map_err(|e| UploadImageError::StorageError(e.to_string()))
    }
}
