use std::sync::Arc;

use crate::modules::multimedia::application::ports::incoming::use_cases::UploadImageUseCase;

#[derive(Clone)]
pub struct MediaUseCases {
    pub upload: Arc<dyn UploadImageUseCase + Send + Sync>,
}
