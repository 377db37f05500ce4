use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: ProjectData) -> Result<Project, CreateProjectError> {
        self.project_repository
            .create(data)
            .await
            .map_err(|e| CreateProjectError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::project::application::ports::outgoing::project_repository::{
        ProjectListFilter, ProjectRepositoryError,
    };
    use crate::tests::support::fixtures::{sample_project, sample_project_data};

    #[derive(Clone)]
    struct MockProjectRepo {
        result: Result<Project, ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepo {
        async fn list(
            &self,
            _filter: ProjectListFilter,
        ) -> Result<Vec<Project>, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn get(&self, _id: i64) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn create(&self, _data: ProjectData) -> Result<Project, ProjectRepositoryError> {
            self.result.clone()
        }

        async fn update(
            &self,
            _id: i64,
            _data: ProjectData,
        ) -> Result<Project, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn delete(&self, _id: i64) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }

        async fn count(&self) -> Result<usize, ProjectRepositoryError> {
            unimplemented!("not needed for create_project tests")
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        let repo = MockProjectRepo {
            result: Ok(sample_project(1)),
        };
        let service = CreateProjectService::new(repo);

        let res = service.execute(sample_project_data()).await;

        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_execute_maps_store_error() {
        let repo = MockProjectRepo {
            result: Err(ProjectRepositoryError::StoreError("store down".to_string())),
        };
        let service = CreateProjectService::new(repo);

        let res = service.execute(sample_project_data()).await;

        assert!(matches!(
            res.unwrap_err(),
            CreateProjectError::RepositoryError(msg) if msg.contains("store down")
        ));
    }
}
