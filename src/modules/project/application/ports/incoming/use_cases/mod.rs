pub mod create_project;
pub mod delete_project;
pub mod get_projects;
pub mod get_single_project;
pub mod update_project;

pub use create_project::{CreateProjectError, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
