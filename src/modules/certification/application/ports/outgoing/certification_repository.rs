use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::Certification;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CertificationData {
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub image: String,
    pub skills: Vec<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificationRepositoryError {
    #[error("Certification not found")]
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
pub trait CertificationRepository: Send + Sync {
    /// Newest first (latest insert leads).
    async fn list(&self) -> Result<Vec<Certification>, CertificationRepositoryError>;

    async fn get(&self, id: i64) -> Result<Certification, CertificationRepositoryError>;

    async fn create(
        &self,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError>;

    async fn update(
        &self,
        id: i64,
        data: CertificationData,
    ) -> Result<Certification, CertificationRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), CertificationRepositoryError>;

    async fn count(&self) -> Result<usize, CertificationRepositoryError>;
}
