use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationData, CertificationRepository, CertificationRepositoryError,
};
use crate::shared::store::{collections, Document, DocumentStore};

#[derive(Clone)]
pub struct CertificationRepositoryMemory {
    store: Arc<DocumentStore>,
}

impl CertificationRepositoryMemory {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    fn to_certification(doc: &Document) -> Result<Certification, CertificationRepositoryError> {
        serde_json::from_value(doc.to_value())
            .map_err(|e| CertificationRepositoryError::SerializationError(e.to_string()))
    }

    fn entity_from(data: CertificationData, id: i64) -> Certification {
        Certification {
            id,
            title: data.title,
            issuer: data.issuer,
            issue_date: data.issue_date,
            expiry_date: data.expiry_date,
            image: data.image,
            skills: data.skills,
            credential_url: data.credential_url,
            description: data.description,
        }
    }
}

#[async_trait]
impl CertificationRepository for CertificationRepositoryMemory {
    async fn list(&self) -> Result<Vec<Certification>, CertificationRepositoryError> {
        let docs = self
            .store
            .list(collections::CERTIFICATIONS)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))?;

        // Latest addition first.
        let mut certifications = Vec::with_capacity(docs.len());
        for doc in docs.iter().rev() {
            certifications.push(Self::to_certification(doc)?);
        }
        Ok(certifications)
    }

    async fn get(&self, id: i64) -> Result<Certification, CertificationRepositoryError> {
        let doc = self
            .store
            .get(collections::CERTIFICATIONS, id)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))?
            .ok_or(CertificationRepositoryError::NotFound)?;

        Self::to_certification(&doc)
    }

    async fn create(
        &self,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError> {
        let body = serde_json::to_value(Self::entity_from(data, 0))
            .map_err(|e| CertificationRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .insert(collections::CERTIFICATIONS, body)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))?;

        Self::to_certification(&doc)
    }

    async fn update(
        &self,
        id: i64,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError> {
        let body = serde_json::to_value(Self::entity_from(data, id))
            .map_err(|e| CertificationRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .replace(collections::CERTIFICATIONS, id, body)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))?
            .ok_or(CertificationRepositoryError::NotFound)?;

        Self::to_certification(&doc)
    }

    async fn delete(&self, id: i64) -> Result<(), CertificationRepositoryError> {
        let removed = self
            .store
            .remove(collections::CERTIFICATIONS, id)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(CertificationRepositoryError::NotFound)
        }
    }

    async fn count(&self) -> Result<usize, CertificationRepositoryError> {
        self.store
            .count(collections::CERTIFICATIONS)
            .map_err(|e| CertificationRepositoryError::StoreError(e.to_string()))
    }
}
