use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationRepository, EducationRepositoryError,
};
use crate::shared::store::{collections, Document, DocumentStore};

#[derive(Clone)]
pub struct EducationRepositoryMemory {
    store: Arc<DocumentStore>,
}

impl EducationRepositoryMemory {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    fn to_education(doc: &Document) -> Result<Education, EducationRepositoryError> {
        serde_json::from_value(doc.to_value())
            .map_err(|e| EducationRepositoryError::SerializationError(e.to_string()))
    }

    fn entity_from(data: EducationData, id: i64) -> Education {
        Education {
            id,
            school: data.school,
            degree: data.degree,
            field: data.field,
            start_date: data.start_date,
            end_date: data.end_date,
            description: data.description,
        }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryMemory {
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        let docs = self
            .store
            .list(collections::EDUCATION)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))?;

        // Insertion order as-is; the timeline is curated by hand.
        let mut entries = Vec::with_capacity(docs.len());
        for doc in &docs {
            entries.push(Self::to_education(doc)?);
        }
        Ok(entries)
    }

    async fn get(&self, id: i64) -> Result<Education, EducationRepositoryError> {
        let doc = self
            .store
            .get(collections::EDUCATION, id)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))?
            .ok_or(EducationRepositoryError::NotFound)?;

        Self::to_education(&doc)
    }

    async fn create(&self, data: EducationData) -> Result<Education, EducationRepositoryError> {
        let body = serde_json::to_value(Self::entity_from(data, 0))
            .map_err(|e| EducationRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .insert(collections::EDUCATION, body)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))?;

        Self::to_education(&doc)
    }

    async fn update(
        &self,
        id: i64,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError> {
        let body = serde_json::to_value(Self::entity_from(data, id))
            .map_err(|e| EducationRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .replace(collections::EDUCATION, id, body)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))?
            .ok_or(EducationRepositoryError::NotFound)?;

        Self::to_education(&doc)
    }

    async fn delete(&self, id: i64) -> Result<(), EducationRepositoryError> {
        let removed = self
            .store
            .remove(collections::EDUCATION, id)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(EducationRepositoryError::NotFound)
        }
    }

    async fn count(&self) -> Result<usize, EducationRepositoryError> {
        self.store
            .count(collections::EDUCATION)
            .map_err(|e| EducationRepositoryError::StoreError(e.to_string()))
    }
}
