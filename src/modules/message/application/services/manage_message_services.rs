// Admin inbox services: list, fetch, read-toggle, delete.

use async_trait::async_trait;

use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetMessagesUseCase, GetSingleMessageUseCase, ManageMessageError,
    MarkMessageReadUseCase,
};
use crate::modules::message::application::ports::outgoing::message_repository::{
    MessageRepository, MessageRepositoryError,
};

fn map_err(e: MessageRepositoryError) -> ManageMessageError {
    match e {
        MessageRepositoryError::NotFound => ManageMessageError::NotFound,
        other => ManageMessageError::RepositoryError(other.to_string()),
    }
}

pub struct GetMessagesService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> GetMessagesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetMessagesUseCase for GetMessagesService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Message>, ManageMessageError> {
        self.repository.list().await.map_err(map_err)
    }
}

pub struct GetSingleMessageService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> GetSingleMessageService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleMessageUseCase for GetSingleMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Message, ManageMessageError> {
        self.repository.get(id).await.map_err(map_err)
    }
}

pub struct MarkMessageReadService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> MarkMessageReadService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkMessageReadUseCase for MarkMessageReadService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: i64, read: bool) -> Result<Message, ManageMessageError> {
        self.repository.set_read(id, read).await.map_err(map_err)
    }
}

pub struct DeleteMessageService<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> DeleteMessageService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<(), ManageMessageError> {
        self.repository.delete(id).await.map_err(map_err)
    }
}
