use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreateProjectError {
    RepositoryError(String),
}

impl fmt::Display for CreateProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProjectError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError>;
}
