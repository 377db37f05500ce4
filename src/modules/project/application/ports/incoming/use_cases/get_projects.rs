use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectListFilter;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum GetProjectsError {
    QueryFailed(String),
}

impl fmt::Display for GetProjectsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProjectsError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError>;
}
