use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::modules::project::application::domain::validation::validate_project_fields;
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full replace: the admin form always submits every field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let errors = validate_project_fields(
        &req.title,
        &req.description,
        &req.image,
        &req.technologies,
        req.github_url.as_deref(),
        req.live_url.as_deref(),
    );
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    let project_data = ProjectData {
        title: req.title,
        description: req.description,
        image: req.image,
        technologies: req.technologies,
        github_url: req.github_url.filter(|u| !u.is_empty()),
        live_url: req.live_url.filter(|u| !u.is_empty()),
        category: req.category,
        featured: req.featured,
    };

    match data.projects.update.execute(id, project_data).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
