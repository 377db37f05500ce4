// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectCategory};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: ProjectCategory,
    pub featured: bool,
}

/// Server-side counterpart of the public listing filters: the category
/// dropdown, the search box (title/description substring), and the
/// featured toggle on the home page.
#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    pub category: Option<ProjectCategory>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first (`createdAt` descending).
    async fn list(&self, filter: ProjectListFilter)
        -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn get(&self, id: i64) -> Result<Project, ProjectRepositoryError>;

    /// The store assigns id and creation timestamp.
    async fn create(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError>;

    /// Full replace; `createdAt` is preserved from the stored document.
    async fn update(&self, id: i64, data: ProjectData)
        -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: i64) -> Result<(), ProjectRepositoryError>;

    async fn count(&self) -> Result<usize, ProjectRepositoryError>;
}
