use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::message::application::domain::validation::validate_message_fields;
use crate::modules::message::application::ports::incoming::use_cases::{
    SubmitMessageError, SubmitMessageInput, SubmitMessageOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMessageRequest {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "Freelance inquiry")]
    pub subject: String,
    #[schema(example = "I would like to discuss a project with you.")]
    pub message: String,
    /// Hidden anti-automation field; humans never see or fill it.
    #[serde(default)]
    #[schema(example = "")]
    pub honeypot: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SubmitMessageResponse {
    received: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Contact form intake
///
/// Stores the message with a server-assigned timestamp and an unread
/// flag. The response does not reveal whether the honeypot discarded
/// the submission.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SubmitMessageRequest,
    responses(
        (status = 201, description = "Submission acknowledged", body = SubmitMessageResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/messages")]
pub async fn submit_message_handler(
    req: web::Json<SubmitMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let errors = validate_message_fields(&req.name, &req.email, &req.subject, &req.message);
    if !errors.is_empty() {
        return ApiResponse::validation_error(errors);
    }

    let input = SubmitMessageInput {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
        honeypot: req.honeypot,
    };

    match data.messages.submit.execute(input).await {
        // Stored and discarded answer identically.
        Ok(SubmitMessageOutcome::Stored(_)) | Ok(SubmitMessageOutcome::Discarded) => {
            ApiResponse::created(SubmitMessageResponse { received: true })
        }

        Err(SubmitMessageError::RepositoryError(e)) => {
            error!("Repository error storing contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
