use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;

#[derive(Debug, Clone)]
pub enum UpdateProjectError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProjectError::NotFound => write!(f, "project not found"),
            UpdateProjectError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: i64, data: ProjectData) -> Result<Project, UpdateProjectError>;
}
