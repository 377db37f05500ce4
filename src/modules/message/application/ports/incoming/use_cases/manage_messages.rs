use async_trait::async_trait;
use std::fmt;

use crate::modules::message::application::domain::entities::Message;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum ManageMessageError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for ManageMessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManageMessageError::NotFound => write!(f, "message not found"),
            ManageMessageError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits (admin inbox)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Message>, ManageMessageError>;
}

#[async_trait]
pub trait GetSingleMessageUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Message, ManageMessageError>;
}

#[async_trait]
pub trait MarkMessageReadUseCase: Send + Sync {
    async fn execute(&self, id: i64, read: bool) -> Result<Message, ManageMessageError>;
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), ManageMessageError>;
}
