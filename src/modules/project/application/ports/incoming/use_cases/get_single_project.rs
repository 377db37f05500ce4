use async_trait::async_trait;
use std::fmt;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone)]
pub enum GetSingleProjectError {
    NotFound,
    QueryFailed(String),
}

impl fmt::Display for GetSingleProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSingleProjectError::NotFound => write!(f, "project not found"),
            GetSingleProjectError::QueryFailed(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<Project, GetSingleProjectError>;
}
