use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::modules::project::application::domain::validation::validate_project_fields;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
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

impl From<CreateProjectRequest> for ProjectData {
    fn from(req: CreateProjectRequest) -> Self {
        ProjectData {
            title: req.title,
            description: req.description,
            image: req.image,
            technologies: req.technologies,
            github_url: req.github_url.filter(|u| !u.is_empty()),
            live_url: req.live_url.filter(|u| !u.is_empty()),
            category: req.category,
            featured: req.featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
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

    match data.projects.create.execute(req.into()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
