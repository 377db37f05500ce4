use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::AdminUser;

pub const SESSION_TOKEN_TYPE: &str = "session";

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    /// Unique token id, the unit of revocation on logout.
    pub jti: String,
    pub exp: i64,
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("token generation failed: {0}")]
    Generation(String),

    #[error("invalid or expired token")]
    Invalid,
}

pub trait TokenProvider: Send + Sync {
    fn generate_session_token(&self, user: &AdminUser) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
