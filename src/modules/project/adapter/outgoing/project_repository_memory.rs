use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectListFilter, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::store::{collections, Document, DocumentStore};

#[derive(Clone)]
pub struct ProjectRepositoryMemory {
    store: Arc<DocumentStore>,
}

impl ProjectRepositoryMemory {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    fn to_project(doc: &Document) -> Result<Project, ProjectRepositoryError> {
        serde_json::from_value(doc.to_value())
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
    }

    fn matches(project: &Project, filter: &ProjectListFilter) -> bool {
        if let Some(category) = filter.category {
            if project.category != category {
                return false;
            }
        }

        if let Some(featured) = filter.featured {
            if project.featured != featured {
                return false;
            }
        }

        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !needle.is_empty()
                && !project.title.to_lowercase().contains(&needle)
                && !project.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }

    fn body_from(data: ProjectData, id: i64, created_at: chrono::DateTime<Utc>) -> Project {
        Project {
            id,
            title: data.title,
            description: data.description,
            image: data.image,
            technologies: data.technologies,
            github_url: data.github_url,
            live_url: data.live_url,
            category: data.category,
            featured: data.featured,
            created_at,
        }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryMemory {
    async fn list(
        &self,
        filter: ProjectListFilter,
    ) -> Result<Vec<Project>, ProjectRepositoryError> {
        let docs = self
            .store
            .list(collections::PROJECTS)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))?;

        let mut projects = Vec::with_capacity(docs.len());
        for doc in &docs {
            let project = Self::to_project(doc)?;
            if Self::matches(&project, &filter) {
                projects.push(project);
            }
        }

        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn get(&self, id: i64) -> Result<Project, ProjectRepositoryError> {
        let doc = self
            .store
            .get(collections::PROJECTS, id)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))?
            .ok_or(ProjectRepositoryError::NotFound)?;

        Self::to_project(&doc)
    }

    async fn create(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        let project = Self::body_from(data, 0, Utc::now());
        let body = serde_json::to_value(&project)
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .insert(collections::PROJECTS, body)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))?;

        Self::to_project(&doc)
    }

    async fn update(&self, id: i64, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        // Creation timestamp is immutable; carry it over from the stored doc.
        let existing = self.get(id).await?;

        let project = Self::body_from(data, id, existing.created_at);
        let body = serde_json::to_value(&project)
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?;

        let doc = self
            .store
            .replace(collections::PROJECTS, id, body)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))?
            .ok_or(ProjectRepositoryError::NotFound)?;

        Self::to_project(&doc)
    }

    async fn delete(&self, id: i64) -> Result<(), ProjectRepositoryError> {
        let removed = self
            .store
            .remove(collections::PROJECTS, id)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))?;

        if removed {
            Ok(())
        } else {
            Err(ProjectRepositoryError::NotFound)
        }
    }

    async fn count(&self) -> Result<usize, ProjectRepositoryError> {
        self.store
            .count(collections::PROJECTS)
            .map_err(|e| ProjectRepositoryError::StoreError(e.to_string()))
    }
}
