use async_trait::async_trait;
use std::fmt;

use crate::modules::multimedia::application::domain::policies::UploadPolicyViolation;
use crate::modules::multimedia::application::ports::outgoing::media_storage::StoredMedia;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum UploadImageError {
    Policy(UploadPolicyViolation),
    StorageError(String),
}

impl fmt::Display for UploadImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadImageError::Policy(violation) => write!(f, "{}", violation),
            UploadImageError::StorageError(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UploadInput {
    /// Original client filename, informational only; stored names are
    /// generated server-side.
    pub filename: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, input: UploadInput) -> Result<StoredMedia, UploadImageError>;
}
