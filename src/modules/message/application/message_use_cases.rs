use std::sync::Arc;

use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, GetSingleMessageUseCase, MarkMessageReadUseCase,
    SubmitMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleMessageUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkMessageReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
}
