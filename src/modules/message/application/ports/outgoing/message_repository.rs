use async_trait::async_trait;

use crate::modules::message::application::domain::entities::Message;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewMessageData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Message>, MessageRepositoryError>;

    async fn get(&self, id: i64) -> Result<Message, MessageRepositoryError>;

    /// The store assigns id, `createdAt`, and `read = false`.
    async fn create(&self, data: NewMessageData) -> Result<Message, MessageRepositoryError>;

    async fn set_read(&self, id: i64, read: bool) -> Result<Message, MessageRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), MessageRepositoryError>;

    async fn count(&self) -> Result<usize, MessageRepositoryError>;
}
