use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::profile::application::domain::entities::{AboutContent, SocialLink};
use crate::modules::profile::application::domain::validation::{
    validate_profile_fields, ProfileFields,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub about_me: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: String,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub about_content: Option<AboutContent>,
    #[serde(default)]
    pub admin_password: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/profile")]
pub async fn create_profile_handler(
    _session: AdminSession,
    req: web::Json<CreateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let errors = validate_profile_fields(ProfileFields {
        name: Some(&req.name),
        title: Some(&req.title),
        bio: Some(&req.bio),
        email: Some(&req.email),
        phone: Some(&req.phone),
        location: Some(&req.location),
        avatar: Some(&req.avatar),
    });
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    let input = CreateProfileInput {
        name: req.name,
        title: req.title,
        bio: req.bio,
        about_me: req.about_me,
        email: req.email,
        phone: req.phone,
        location: req.location,
        avatar: req.avatar,
        cv: req.cv,
        social_links: req.social_links,
        about_content: req.about_content,
        admin_password: req.admin_password,
    };

    match data.profile.create.execute(input).await {
        Ok(profile) => ApiResponse::created(profile),

        Err(CreateProfileError::AlreadyExists) => ApiResponse::error(
            actix_web::http::StatusCode::CONFLICT,
            "PROFILE_ALREADY_EXISTS",
            "A profile already exists; update it instead",
        ),

        Err(CreateProfileError::RepositoryError(e)) => {
            error!("Repository error creating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
