use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::AdminUser;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CheckSessionError {
    /// Malformed, expired, or wrongly-typed token: treated as anonymous.
    InvalidToken,
    /// The token was valid once but has been logged out.
    Revoked,
}

impl fmt::Display for CheckSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckSessionError::InvalidToken => write!(f, "invalid token"),
            CheckSessionError::Revoked => write!(f, "token revoked"),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user: AdminUser,
    pub jti: String,
}

/// Re-derives the authenticated state from a presented session marker,
/// e.g. after the admin SPA restarts and replays its stored token.
#[async_trait]
pub trait CheckSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<SessionInfo, CheckSessionError>;
}
