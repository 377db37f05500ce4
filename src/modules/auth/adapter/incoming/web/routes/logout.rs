use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Explicit logout: revokes the presented session token. There is no
/// other way out of the authenticated state.
#[post("/api/auth/logout")]
pub async fn logout_handler(session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    data.auth.logout.execute(&session.jti).await;
    ApiResponse::no_content()
}
