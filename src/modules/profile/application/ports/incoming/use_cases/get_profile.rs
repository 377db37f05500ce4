use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::Profile;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum GetProfileError {
    /// No profile document exists. Surfaced as an explicit error rather
    /// than silently substituting bundled defaults.
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetProfileError::NotFound => write!(f, "profile not found"),
            GetProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, GetProfileError>;
}
