use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: i64, data: ProjectData) -> Result<Project, UpdateProjectError> {
        self.project_repository
            .update(id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                other => UpdateProjectError::RepositoryError(other.to_string()),
            })
    }
}
