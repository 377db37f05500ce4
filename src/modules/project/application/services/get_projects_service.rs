use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectListFilter, ProjectRepository,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetProjectsService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> GetProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        self.project_repository
            .list(filter)
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}
