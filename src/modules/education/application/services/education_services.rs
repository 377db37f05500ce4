// Thin delegation services over the education repository.

use async_trait::async_trait;

use crate::modules::education::application::domain::entities::Education;
use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, EducationError, GetEducationListUseCase,
    GetSingleEducationUseCase, UpdateEducationUseCase,
};
use crate::modules::education::application::ports::outgoing::education_repository::{
    EducationData, EducationRepository, EducationRepositoryError,
};

fn map_err(e: EducationRepositoryError) -> EducationError {
    match e {
        EducationRepositoryError::NotFound => EducationError::NotFound,
        other => EducationError::RepositoryError(other.to_string()),
    }
}

pub struct GetEducationListService<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> GetEducationListService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEducationListUseCase for GetEducationListService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Education>, EducationError> {
        self.repository.list().await.map_err(map_err)
    }
}

pub struct GetSingleEducationService<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> GetSingleEducationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleEducationUseCase for GetSingleEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Education, EducationError> {
        self.repository.get(id).await.map_err(map_err)
    }
}

pub struct CreateEducationService<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> CreateEducationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateEducationUseCase for CreateEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, data: EducationData) -> Result<Education, EducationError> {
        self.repository.create(data).await.map_err(map_err)
    }
}

pub struct UpdateEducationService<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> UpdateEducationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for UpdateEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: i64, data: EducationData) -> Result<Education, EducationError> {
        self.repository.update(id, data).await.map_err(map_err)
    }
}

pub struct DeleteEducationService<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> DeleteEducationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for DeleteEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<(), EducationError> {
        self.repository.delete(id).await.map_err(map_err)
    }
}
