use actix_web::{delete, get, patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::message::application::ports::incoming::use_cases::ManageMessageError;
use crate::shared::api::ApiResponse;
use crate::shared::store::envelope::Paginated;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// `{"read": true}` marks as read; the admin inbox also un-marks.
#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub read: bool,
}

fn repository_error(context: &str, e: String) -> actix_web::HttpResponse {
    error!("Repository error {}: {}", context, e);
    ApiResponse::internal_error()
}

//
// ──────────────────────────────────────────────────────────
// Handlers (admin inbox)
// ──────────────────────────────────────────────────────────
//

#[get("/api/messages")]
pub async fn get_messages_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.get_list.execute().await {
        Ok(messages) => ApiResponse::success(Paginated::from(messages)),
        Err(ManageMessageError::NotFound) => ApiResponse::internal_error(),
        Err(ManageMessageError::RepositoryError(e)) => repository_error("listing messages", e),
    }
}

#[get("/api/messages/{id}")]
pub async fn get_single_message_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.get_single.execute(path.into_inner()).await {
        Ok(message) => ApiResponse::success(message),
        Err(ManageMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(ManageMessageError::RepositoryError(e)) => repository_error("fetching message", e),
    }
}

#[patch("/api/messages/{id}")]
pub async fn mark_message_read_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    req: web::Json<MarkReadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .messages
        .mark_read
        .execute(path.into_inner(), req.read)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(ManageMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(ManageMessageError::RepositoryError(e)) => repository_error("marking message", e),
    }
}

#[delete("/api/messages/{id}")]
pub async fn delete_message_handler(
    _session: AdminSession,
    path: web::Path<i64>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.messages.delete.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ManageMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(ManageMessageError::RepositoryError(e)) => repository_error("deleting message", e),
    }
}
