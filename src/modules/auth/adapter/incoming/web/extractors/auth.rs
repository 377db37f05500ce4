use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, SESSION_TOKEN_TYPE,
};
use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;
use crate::shared::api::ApiResponse;

/// An authenticated admin session. Extracting this from a request is the
/// auth gate in front of every content-management route.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user_id: String,
    pub email: String,
    pub jti: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let revocations =
            match req.app_data::<web::Data<Arc<dyn TokenRevocationList + Send + Sync>>>() {
                Some(list) => list,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        // Extract token from Authorization header
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        // Verify token
        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != SESSION_TOKEN_TYPE {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                if revocations.is_revoked(&claims.jti) {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "TOKEN_REVOKED",
                        "Session has been logged out",
                    ))));
                }

                ready(Ok(AdminSession {
                    user_id: claims.sub,
                    email: claims.email,
                    jti: claims.jti,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
