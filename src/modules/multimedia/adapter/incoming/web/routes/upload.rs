use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, Responder};
use futures::StreamExt;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::modules::multimedia::application::domain::policies::{
    UploadPolicy, UploadPolicyViolation,
};
use crate::modules::multimedia::application::ports::incoming::use_cases::{
    UploadImageError, UploadInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Accepts a multipart `file` field and answers `{url}`: a hosted file
/// when a media directory is configured, an inline data URL otherwise.
#[post("/api/upload")]
pub async fn upload_handler(
    _session: AdminSession,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                return ApiResponse::bad_request("INVALID_MULTIPART", &e.to_string());
            }
        };

        if field.name() != "file" {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let filename = field
            .content_disposition()
            .get_filename()
            .map(|s| s.to_string());

        let mut bytes: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => {
                    bytes.extend_from_slice(&data);
                    // One byte over the cap is enough for the policy to
                    // reject; stop buffering the rest.
                    if bytes.len() > UploadPolicy::DEFAULT_MAX_BYTES {
                        break;
                    }
                }
                Err(e) => {
                    return ApiResponse::bad_request("UPLOAD_READ_ERROR", &e.to_string());
                }
            }
        }

        let input = UploadInput {
            filename,
            content_type,
            bytes,
        };

        return match data.media.upload.execute(input).await {
            Ok(stored) => ApiResponse::success(stored),

            Err(UploadImageError::Policy(UploadPolicyViolation::UnsupportedType(t))) => {
                ApiResponse::error(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_MEDIA_TYPE",
                    &format!("Unsupported content type: {}", t),
                )
            }

            Err(UploadImageError::Policy(UploadPolicyViolation::TooLarge { max, .. })) => {
                ApiResponse::payload_too_large(
                    "FILE_TOO_LARGE",
                    &format!("File exceeds the {} byte limit", max),
                )
            }

            Err(UploadImageError::StorageError(e)) => {
                error!("Storage error during upload: {}", e);
                ApiResponse::internal_error()
            }
        };
    }

    ApiResponse::bad_request("MISSING_FILE_FIELD", "Expected a multipart 'file' field")
}
