use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        match self.profile_repository.get().await {
            Ok(Some(stored)) => Ok(stored.profile),
            Ok(None) => Err(GetProfileError::NotFound),
            Err(e) => Err(GetProfileError::RepositoryError(e.to_string())),
        }
    }
}
