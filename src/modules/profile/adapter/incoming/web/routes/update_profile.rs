use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::profile::application::domain::entities::{AboutContent, SocialLink};
use crate::modules::profile::application::domain::validation::{
    validate_profile_fields, ProfileFields,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// PUT is partial here; omitted fields keep their stored values. The
/// admin form only submits the sections it edits.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub cv: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub about_content: Option<AboutContent>,
    pub admin_password: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[put("/api/profile")]
pub async fn update_profile_handler(
    _session: AdminSession,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let errors = validate_profile_fields(ProfileFields {
        name: req.name.as_deref(),
        title: req.title.as_deref(),
        bio: req.bio.as_deref(),
        email: req.email.as_deref(),
        phone: req.phone.as_deref(),
        location: req.location.as_deref(),
        avatar: req.avatar.as_deref(),
    });
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    let input = UpdateProfileInput {
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

    match data.profile.update.execute(input).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::adapter::outgoing::token_revocation_memory::InMemoryTokenRevocationList;
    use crate::modules::auth::application::domain::entities::AdminUser;
    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;
    use crate::modules::profile::application::domain::entities::Profile;
    use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_profile;

    struct MockUpdateProfileUseCase {
        result: Result<Profile, UpdateProfileError>,
    }

    #[async_trait]
    impl UpdateProfileUseCase for MockUpdateProfileUseCase {
        async fn execute(&self, _data: UpdateProfileInput) -> Result<Profile, UpdateProfileError> {
            self.result.clone()
        }
    }

    fn auth_fixtures() -> (
        Arc<dyn TokenProvider + Send + Sync>,
        Arc<dyn TokenRevocationList + Send + Sync>,
        String,
    ) {
        let provider = JwtTokenService::new(JwtConfig {
            issuer: "portfolio-api".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            session_token_expiry: 3600,
        });
        let token = provider
            .generate_session_token(&AdminUser::default())
            .unwrap();
        (
            Arc::new(provider),
            Arc::new(InMemoryTokenRevocationList::new()),
            token,
        )
    }

    #[actix_web::test]
    async fn test_update_profile_success() {
        let (provider, revocations, token) = auth_fixtures();

        let app_state = TestAppStateBuilder::default()
            .with_update_profile(MockUpdateProfileUseCase {
                result: Ok(sample_profile()),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .app_data(web::Data::new(revocations))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"title": "New Title"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_update_profile_requires_auth() {
        let app_state = TestAppStateBuilder::default().build();
        let (provider, revocations, _token) = auth_fixtures();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .app_data(web::Data::new(revocations))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .set_json(json!({"title": "New Title"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_invalid_fields_are_rejected_per_field() {
        let (provider, revocations, token) = auth_fixtures();
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .app_data(web::Data::new(revocations))
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(json!({"email": "nope", "bio": "short"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["fields"]["email"].is_string());
        assert!(body["error"]["fields"]["bio"].is_string());
    }
}
