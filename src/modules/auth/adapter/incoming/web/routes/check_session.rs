use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;

use crate::modules::auth::adapter::incoming::web::extractors::auth::extract_token_from_header;
use crate::modules::auth::application::ports::incoming::use_cases::CheckSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize)]
pub struct SessionResponse {
    authenticated: bool,
    user: SessionUserInfo,
}

#[derive(Serialize)]
pub struct SessionUserInfo {
    id: String,
    email: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// The admin panel replays its stored token on startup to re-derive the
/// authenticated state. A missing or malformed marker means anonymous.
#[get("/api/auth/session")]
pub async fn check_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let Some(token) = extract_token_from_header(&req) else {
        return ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        );
    };

    match data.auth.check_session.execute(&token).await {
        Ok(info) => ApiResponse::success(SessionResponse {
            authenticated: true,
            user: SessionUserInfo {
                id: info.user.id,
                email: info.user.email,
            },
        }),

        Err(CheckSessionError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(CheckSessionError::Revoked) => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Session has been logged out")
        }
    }
}
