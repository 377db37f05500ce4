use async_trait::async_trait;
use std::fmt;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CertificationError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for CertificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificationError::NotFound => write!(f, "certification not found"),
            CertificationError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetCertificationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Certification>, CertificationError>;
}

#[async_trait]
pub trait GetSingleCertificationUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Certification, CertificationError>;
}

#[async_trait]
pub trait CreateCertificationUseCase: Send + Sync {
    async fn execute(&self, data: CertificationData) -> Result<Certification, CertificationError>;
}

#[async_trait]
pub trait UpdateCertificationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i64,
        data: CertificationData,
    ) -> Result<Certification, CertificationError>;
}

#[async_trait]
pub trait DeleteCertificationUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), CertificationError>;
}
