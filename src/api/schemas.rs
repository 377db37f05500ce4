// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "INVALID_CREDENTIALS")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Invalid password")]
    pub message: String,
}
