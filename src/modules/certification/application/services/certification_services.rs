// Thin delegation services; the repository carries the semantics.

use async_trait::async_trait;

use crate::modules::certification::application::domain::entities::Certification;
use crate::modules::certification::application::ports::incoming::use_cases::{
    CertificationError, CreateCertificationUseCase, DeleteCertificationUseCase,
    GetCertificationsUseCase, GetSingleCertificationUseCase, UpdateCertificationUseCase,
};
use crate::modules::certification::application::ports::outgoing::certification_repository::{
    CertificationData, CertificationRepository, CertificationRepositoryError,
};

fn map_err(e: CertificationRepositoryError) -> CertificationError {
    match e {
        CertificationRepositoryError::NotFound => CertificationError::NotFound,
        other => CertificationError::RepositoryError(other.to_string()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Services
// ──────────────────────────────────────────────────────────
//

pub struct GetCertificationsService<R: CertificationRepository> {
    repository: R,
}

impl<R: CertificationRepository> GetCertificationsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCertificationsUseCase for GetCertificationsService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Certification>, CertificationError> {
        self.repository.list().await.map_err(map_err)
    }
}

pub struct GetSingleCertificationService<R: CertificationRepository> {
    repository: R,
}

impl<R: CertificationRepository> GetSingleCertificationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleCertificationUseCase for GetSingleCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Certification, CertificationError> {
        self.repository.get(id).await.map_err(map_err)
    }
}

pub struct CreateCertificationService<R: CertificationRepository> {
    repository: R,
}

impl<R: CertificationRepository> CreateCertificationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCertificationUseCase for CreateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, data: CertificationData) -> Result<Certification, CertificationError> {
        self.repository.create(data).await.map_err(map_err)
    }
}

pub struct UpdateCertificationService<R: CertificationRepository> {
    repository: R,
}

impl<R: CertificationRepository> UpdateCertificationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCertificationUseCase for UpdateCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i64,
        data: CertificationData,
    ) -> Result<Certification, CertificationError> {
        self.repository.update(id, data).await.map_err(map_err)
    }
}

pub struct DeleteCertificationService<R: CertificationRepository> {
    repository: R,
}

impl<R: CertificationRepository> DeleteCertificationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCertificationUseCase for DeleteCertificationService<R>
where
    R: CertificationRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<(), CertificationError> {
        self.repository.delete(id).await.map_err(map_err)
    }
}
