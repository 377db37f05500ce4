use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::certification::application::ports::incoming::use_cases::CertificationError;
use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationData;
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
pub struct CertificationRequest {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CertificationRequest {
    fn validate(&self) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        if self.title.trim().is_empty() || self.title.len() > 100 {
            errors.insert(
                "title".to_string(),
                "Title must be between 1 and 100 characters".to_string(),
            );
        }
        if self.issuer.trim().is_empty() {
            errors.insert("issuer".to_string(), "Issuer is required".to_string());
        }
        errors
    }

    fn into_data(self) -> CertificationData {
        CertificationData {
            title: self.title,
            issuer: self.issuer,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date.filter(|d| !d.is_empty()),
            image: self.image,
            skills: self.skills,
            credential_url: self.credential_url.filter(|u| !u.is_empty()),
            description: self.description.filter(|d| !d.is_empty()),
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

#[get("/api/certifications")]
pub async fn get_certifications_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certifications.get_list.execute().await {
        Ok(certifications) => ApiResponse::success(Paginated::from(certifications)),
        // A list never reports NotFound; treat it like any repo failure.
        Err(CertificationError::NotFound) => ApiResponse::internal_error(),
        Err(CertificationError::RepositoryError(e)) => {
            repository_error("listing certifications", e)
        }
    }
}

#[get("/api/certifications/{id}")]
pub async fn get_single_certification_handler(
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certifications.get_single.execute(path.into_inner()).await {
        Ok(certification) => ApiResponse::success(certification),
        Err(CertificationError::NotFound) => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }
        Err(CertificationError::RepositoryError(e)) => {
            repository_error("fetching certification", e)
        }
    }
}

#[post("/api/certifications")]
pub async fn create_certification_handler(
    _session: AdminSession,
    req: web::Json<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let errors = req.validate();
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    match data.certifications.create.execute(req.into_data()).await {
        Ok(created) => ApiResponse::created(created),
        Err(CertificationError::NotFound) => ApiResponse::internal_error(),
        Err(CertificationError::RepositoryError(e)) => {
            repository_error("creating certification", e)
        }
    }
}

#[put("/api/certifications/{id}")]
pub async fn update_certification_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    req: web::Json<CertificationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let errors = req.validate();
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    match data
        .certifications
        .update
        .execute(path.into_inner(), req.into_data())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(CertificationError::NotFound) => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }
        Err(CertificationError::RepositoryError(e)) => {
            repository_error("updating certification", e)
        }
    }
}

#[delete("/api/certifications/{id}")]
pub async fn delete_certification_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certifications.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(CertificationError::NotFound) => {
            ApiResponse::not_found("CERTIFICATION_NOT_FOUND", "Certification not found")
        }
        Err(CertificationError::RepositoryError(e)) => {
            repository_error("deleting certification", e)
        }
    }
}
