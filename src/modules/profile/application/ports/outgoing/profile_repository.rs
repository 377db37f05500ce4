// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{
    AboutContent, Profile, SocialLink,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// The profile document as stored: public entity plus the write-only
/// admin secret hash. Only auth and the repository ever see the hash.
#[derive(Debug, Clone)]
pub struct StoredProfile {
    pub profile: Profile,
    pub admin_password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
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
    pub admin_password_hash: Option<String>,
}

/// Partial update: `None` keeps the stored value; omitted fields never
/// clear anything.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
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
    pub admin_password_hash: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Profile already exists")]
    AlreadyExists,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The first document is authoritative if the collection somehow
    /// holds more than one.
    async fn get(&self) -> Result<Option<StoredProfile>, ProfileRepositoryError>;

    async fn create(&self, data: NewProfile) -> Result<StoredProfile, ProfileRepositoryError>;

    async fn update(&self, data: ProfilePatch) -> Result<StoredProfile, ProfileRepositoryError>;
}
