use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;

#[derive(Debug, Clone)]
pub struct EducationData {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Education entry not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Store insertion order, deliberately not re-sorted: the site shows
    /// the timeline in the order the admin entered it.
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError>;

    async fn get(&self, id: i64) -> Result<Education, EducationRepositoryError>;

    async fn create(&self, data: EducationData) -> Result<Education, EducationRepositoryError>;

    async fn update(
        &self,
        id: i64,
        data: EducationData,
    ) -> Result<Education, EducationRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), EducationRepositoryError>;

    async fn count(&self) -> Result<usize, EducationRepositoryError>;
}
