use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::education::application::ports::incoming::use_cases::EducationError;
use crate::modules::education::application::ports::outgoing::education_repository::EducationData;
use crate::shared::api::ApiResponse;
use crate::shared::store::envelope::Paginated;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl EducationRequest {
    fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if self.school.trim().is_empty() {
            errors.insert("school".to_string(), "School is required".to_string());
        }
        if self.degree.trim().is_empty() {
            errors.insert("degree".to_string(), "Degree is required".to_string());
        }
        if self.field.trim().is_empty() {
            errors.insert("field".to_string(), "Field of study is required".to_string());
        }
        if !self.description.is_empty() && self.description.trim().len() < 10 {
            errors.insert(
                "description".to_string(),
                "Description must be at least 10 characters".to_string(),
            );
        }
        errors
    }

    fn into_data(self) -> EducationData {
        EducationData {
            school: self.school,
            degree: self.degree,
            field: self.field,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        }
    }
}

fn repository_error(context: &str, e: String) -> actix_web::HttpResponse {
    error!("Repository error {}: {}", context, e);
    ApiResponse::internal_error()
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/api/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.get_list.execute().await {
        Ok(entries) => ApiResponse::success(Paginated::from(entries)),
        Err(EducationError::NotFound) => ApiResponse::internal_error(),
        Err(EducationError::RepositoryError(e)) => repository_error("listing education", e),
    }
}

#[get("/api/education/{id}")]
pub async fn get_single_education_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.get_single.execute(path.into_inner()).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(EducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }
        Err(EducationError::RepositoryError(e)) => repository_error("fetching education", e),
    }
}

#[post("/api/education")]
pub async fn create_education_handler(
    _session: AdminSession,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let errors = req.validate();
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    match data.education.create.execute(req.into_data()).await {
        Ok(created) => ApiResponse::created(created),
        Err(EducationError::NotFound) => ApiResponse::internal_error(),
        Err(EducationError::RepositoryError(e)) => repository_error("creating education", e),
    }
}

#[put("/api/education/{id}")]
pub async fn update_education_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    req: web::Json<EducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let errors = req.validate();
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    match data
        .education
        .update
        .execute(path.into_inner(), req.into_data())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(EducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }
        Err(EducationError::RepositoryError(e)) => repository_error("updating education", e),
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.education.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(EducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }
        Err(EducationError::RepositoryError(e)) => repository_error("deleting education", e),
    }
}
