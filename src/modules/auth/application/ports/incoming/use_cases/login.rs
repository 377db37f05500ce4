use async_trait::async_trait;
use std::fmt;

use crate::modules::auth::application::domain::entities::AdminUser;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Wrong password, or no admin secret configured anywhere.
    InvalidCredentials,
    RepositoryError(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "invalid credentials"),
            LoginError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginData {
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: AdminUser,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, data: LoginData) -> Result<LoginResult, LoginError>;
}
