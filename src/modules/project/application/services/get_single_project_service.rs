use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

pub struct GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetSingleProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetSingleProjectUseCase for GetSingleProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: i64) -> Result<Project, GetSingleProjectError> {
        self.project_repository.get(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => GetSingleProjectError::NotFound,
            other => GetSingleProjectError::QueryFailed(other.to_string()),
        })
    }
}
