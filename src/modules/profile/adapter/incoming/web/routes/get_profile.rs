use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Public singleton read. An absent profile is an explicit 404 so every
/// consumer sees the same "backend has no content" signal instead of a
/// silent default.
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetProfileError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }

        Err(GetProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::profile::application::domain::entities::Profile;
    use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_profile;

    struct MockGetProfileUseCase {
        result: Result<Profile, GetProfileError>,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfileUseCase {
        async fn execute(&self) -> Result<Profile, GetProfileError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_profile_is_served_bare_without_secret() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(MockGetProfileUseCase {
                result: Ok(sample_profile()),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], sample_profile().name);
        assert!(body["socialLinks"].is_array());
        assert!(
            body.get("adminPassword").is_none(),
            "the admin secret must never be serialized"
        );
    }

    #[actix_web::test]
    async fn test_absent_profile_is_an_explicit_404() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(MockGetProfileUseCase {
                result: Err(GetProfileError::NotFound),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROFILE_NOT_FOUND");
    }
}
