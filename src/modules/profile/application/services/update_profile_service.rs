use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    ProfilePatch, ProfileRepository, ProfileRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(
        profile_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            profile_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateProfileInput) -> Result<Profile, UpdateProfileError> {
        // A new admin secret is hashed before it can touch the store.
        let admin_password_hash = match data.admin_password {
            Some(secret) => Some(
                self.password_hasher
                    .hash_password(&secret)
                    .await
                    .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?,
            ),
            None => None,
        };

        let stored = self
            .profile_repository
            .update(ProfilePatch {
                name: data.name,
                title: data.title,
                bio: data.bio,
                about_me: data.about_me,
                email: data.email,
                phone: data.phone,
                location: data.location,
                avatar: data.avatar,
                cv: data.cv,
                social_links: data.social_links,
                about_content: data.about_content,
                admin_password_hash,
            })
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(stored.profile)
    }
}
