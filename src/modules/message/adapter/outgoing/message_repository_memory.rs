use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::modules::message::application::domain::entities::Message;
use crate::modules::message::application::ports::outgoing::message_repository::{
    MessageRepository, MessageRepositoryError, NewMessageData,
};
use crate::shared::store::{collections, Document, DocumentStore};

#[derive(Clone)]
pub struct MessageRepositoryMemory {
    store: Arc<DocumentStore>,
}

impl MessageRepositoryMemory {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    fn to_message(doc: &Document) -> Result<Message, MessageRepositoryError> {
        serde_json::from_value(doc.to_value())
            .map_err(|e| MessageRepositoryError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryMemory {
    async fn list(&self) -> Result<Vec<Message>, MessageRepositoryError> {
        let docs = self
            .store
            .list(collections::MESSAGES)
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?;

        let mut messages = Vec::with_capacity(docs.len());
        for doc in &docs {
            messages.push(Self::to_message(doc)?);
        }
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn get(&self, id: i64) -> Result<Message, MessageRepositoryError> {
        let doc = self
            .store
            .get(collections::MESSAGES, id)
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?
            .ok_or(MessageRepositoryError::NotFound)?;

        Self::to_message(&doc)
    }

    async fn create(&self, data: NewMessageData) -> Result<Message, MessageRepositoryError> {
        let message = Message {
            id: 0,
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            created_at: Utc::now(),
            read: false,
        };

        let body = serde_json::to_value(&message)
            .map_err(|e| MessageRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .insert(collections::MESSAGES, body)
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?;

        Self::to_message(&doc)
    }

    async fn set_read(&self, id: i64, read: bool) -> Result<Message, MessageRepositoryError> {
        let doc = self
            .store
            .merge(collections::MESSAGES, id, json!({ "read": read }))
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?
            .ok_or(MessageRepositoryError::NotFound)?;

        Self::to_message(&doc)
    }

    async fn delete(&self, id: i64) -> Result<(), MessageRepositoryError> {
        let removed = self
            .store
            .remove(collections::MESSAGES, id)
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(MessageRepositoryError::NotFound)
        }
    }

    async fn count(&self) -> Result<usize, MessageRepositoryError> {
        self.store
            .count(collections::MESSAGES)
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> NewMessageData {
        NewMessageData {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Speaking engagement".to_string(),
            message: "Would you talk about compilers next month?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_timestamp_and_unread_flag() {
        let repo = MessageRepositoryMemory::new(Arc::new(DocumentStore::new()));

        let created = repo.create(data()).await.unwrap();

        assert!(!created.read);
        assert!(created.id > 0);
    }

    #[tokio::test]
    async fn test_identical_payloads_become_distinct_documents() {
        let repo = MessageRepositoryMemory::new(Arc::new(DocumentStore::new()));

        let a = repo.create(data()).await.unwrap();
        let b = repo.create(data()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_read_toggle_is_persisted_and_reversible() {
        let repo = MessageRepositoryMemory::new(Arc::new(DocumentStore::new()));
        let created = repo.create(data()).await.unwrap();

        let marked = repo.set_read(created.id, true).await.unwrap();
        assert!(marked.read);
        assert_eq!(marked.subject, created.subject);

        let unmarked = repo.set_read(created.id, false).await.unwrap();
        assert!(!unmarked.read);
    }

    #[tokio::test]
    async fn test_delete_removes_the_document() {
        let repo = MessageRepositoryMemory::new(Arc::new(DocumentStore::new()));
        let created = repo.create(data()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(matches!(
            repo.get(created.id).await.unwrap_err(),
            MessageRepositoryError::NotFound
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
