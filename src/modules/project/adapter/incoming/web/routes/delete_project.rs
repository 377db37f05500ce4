use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Destructive; the admin panel asks for confirmation before calling this.
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
