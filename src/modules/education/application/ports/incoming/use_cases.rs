use async_trait::async_trait;
use std::fmt;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::outgoing::education_repository::EducationData;

#[derive(Debug, Clone)]
pub enum EducationError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for EducationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EducationError::NotFound => write!(f, "education entry not found"),
            EducationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetEducationListUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, EducationError>;
}

#[async_trait]
pub trait GetSingleEducationUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Education, EducationError>;
}

#[async_trait]
pub trait CreateEducationUseCase: Send + Sync {
    async fn execute(&self, data: EducationData) -> Result<Education, EducationError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(&self, id: i64, data: EducationData) -> Result<Education, EducationError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), EducationError>;
}
