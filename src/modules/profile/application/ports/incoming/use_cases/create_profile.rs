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
pub enum CreateProfileError {
    /// The profile is a singleton; a second create is a conflict.
    AlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for CreateProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateProfileError::AlreadyExists => write!(f, "profile already exists"),
            CreateProfileError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfileInput {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub about_me: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: String,
    pub cv: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub about_content: Option<AboutContent>,
    /// Plaintext admin secret; hashed before it reaches the store.
    pub admin_password: Option<String>,
}

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, data: CreateProfileInput) -> Result<Profile, CreateProfileError>;
}
