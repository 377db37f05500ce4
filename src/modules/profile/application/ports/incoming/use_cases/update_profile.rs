use async_trait::async_trait;
use std::fmt;

use crate::modules::profile::application::domain::entities::{
    AboutContent, Profile, SocialLink,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileError::NotFound => write!(f, "profile not found"),
            UpdateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

/// Partial update; `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub about_me: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
    pub cv: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub about_content: Option<AboutContent>,
    /// Plaintext replacement admin secret; hashed before storage.
    pub admin_password: Option<String>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateProfileInput) -> Result<Profile, UpdateProfileError>;
}
