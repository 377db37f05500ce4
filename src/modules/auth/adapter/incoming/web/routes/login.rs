use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::ports::incoming::use_cases::{LoginData, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Admin password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque session token to present as `Authorization: Bearer ...`
    token: String,
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "1")]
    id: String,
    #[schema(example = "admin@portfolio.com")]
    email: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Admin login
///
/// Verifies the admin password server-side and returns a session token
/// plus the minimal user record the admin panel keeps around.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .auth
        .login
        .execute(LoginData {
            password: req.password,
        })
        .await
    {
        Ok(result) => ApiResponse::success(LoginResponse {
            token: result.token,
            user: LoginUserInfo {
                id: result.user.id,
                email: result.user.email,
            },
        }),

        Err(LoginError::InvalidCredentials) => {
            warn!("rejected admin login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid password")
        }

        Err(LoginError::RepositoryError(e)) => {
            error!("Repository error during login: {}", e);
            ApiResponse::internal_error()
        }
    }
}
