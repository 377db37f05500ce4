pub mod create_project_service;
pub mod delete_project_service;
pub mod get_projects_service;
pub mod get_single_project_service;
pub mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use update_project_service::UpdateProjectService;
