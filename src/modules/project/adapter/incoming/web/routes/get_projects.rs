use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectListFilter;
use crate::shared::api::ApiResponse;
use crate::shared::store::envelope::Paginated;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetProjectsQuery {
    pub category: Option<ProjectCategory>,
    pub search: Option<String>,
    pub featured: Option<bool>,
}

impl From<GetProjectsQuery> for ProjectListFilter {
    fn from(q: GetProjectsQuery) -> Self {
        ProjectListFilter {
            category: q.category,
            search: q.search,
            featured: q.featured,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Public project listing, newest first. An empty collection is a normal
/// empty page, not an error.
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner().into();

    match data.projects.get_list.execute(filter).await {
        Ok(projects) => ApiResponse::success(Paginated::from(projects)),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
