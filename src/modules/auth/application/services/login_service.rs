use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginData, LoginError, LoginResult, LoginUseCase,
};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::profile::application::ports::outgoing::profile_repository::ProfileRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Verifies the submitted password against the argon2 hash stored in the
/// profile document, falling back to the hash of the `ADMIN_PASSWORD`
/// environment secret when the store carries none. On success a session
/// token is issued; the secret itself never leaves the server.
pub struct LoginService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    fallback_password_hash: Option<String>,
}

impl<R> LoginService<R>
where
    R: ProfileRepository,
{
    pub fn new(
        profile_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        fallback_password_hash: Option<String>,
    ) -> Self {
        Self {
            profile_repository,
            password_hasher,
            token_provider,
            fallback_password_hash,
        }
    }
}

#[async_trait]
impl<R> LoginUseCase for LoginService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, data: LoginData) -> Result<LoginResult, LoginError> {
        let stored = self
            .profile_repository
            .get()
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        let mut user = AdminUser::default();
        let mut hash = self.fallback_password_hash.clone();

        if let Some(stored) = stored {
            if !stored.profile.email.is_empty() {
                user = AdminUser::with_email(stored.profile.email);
            }
            if let Some(stored_hash) = stored.admin_password_hash {
                hash = Some(stored_hash);
            }
        }

        // No secret in the store and none configured: nobody can log in.
        let Some(hash) = hash else {
            return Err(LoginError::InvalidCredentials);
        };

        let matches = self
            .password_hasher
            .verify_password(&data.password, &hash)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_session_token(&user)
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginResult { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::ports::outgoing::token_provider::{
        SessionClaims, TokenError,
    };
    use crate::modules::profile::application::ports::outgoing::profile_repository::{
        NewProfile, ProfilePatch, ProfileRepositoryError, StoredProfile,
    };
    use crate::tests::support::fixtures::sample_profile;

    /* --------------------------------------------------
     * Mocks
     * -------------------------------------------------- */

    struct MockProfileRepo {
        result: Result<Option<StoredProfile>, ProfileRepositoryError>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepo {
        async fn get(&self) -> Result<Option<StoredProfile>, ProfileRepositoryError> {
            self.result.clone()
        }

        async fn create(
            &self,
            _data: NewProfile,
        ) -> Result<StoredProfile, ProfileRepositoryError> {
            unimplemented!("not used in login tests")
        }

        async fn update(
            &self,
            _data: ProfilePatch,
        ) -> Result<StoredProfile, ProfileRepositoryError> {
            unimplemented!("not used in login tests")
        }
    }

    /// Accepts exactly one password; hashes are compared literally.
    struct FakeHasher;

    #[async_trait]
    impl PasswordHasher for FakeHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{}", password))
        }

        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
            Ok(hash == format!("hashed:{}", password))
        }
    }

    struct FakeTokenProvider;

    impl TokenProvider for FakeTokenProvider {
        fn generate_session_token(&self, _user: &AdminUser) -> Result<String, TokenError> {
            Ok("session-token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<SessionClaims, TokenError> {
            unimplemented!("not used in login tests")
        }
    }

    fn service(
        stored: Result<Option<StoredProfile>, ProfileRepositoryError>,
        fallback: Option<&str>,
    ) -> LoginService<MockProfileRepo> {
        LoginService::new(
            MockProfileRepo { result: stored },
            Arc::new(FakeHasher),
            Arc::new(FakeTokenProvider),
            fallback.map(|p| format!("hashed:{}", p)),
        )
    }

    fn stored_profile(secret: Option<&str>) -> StoredProfile {
        StoredProfile {
            profile: sample_profile(),
            admin_password_hash: secret.map(|s| format!("hashed:{}", s)),
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn test_login_with_stored_secret_succeeds() {
        let service = service(Ok(Some(stored_profile(Some("hunter2-long")))), None);

        let result = service
            .execute(LoginData {
                password: "hunter2-long".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.token, "session-token");
        assert_eq!(result.user.email, sample_profile().email);
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let service = service(Ok(Some(stored_profile(Some("hunter2-long")))), None);

        let err = service
            .execute(LoginData {
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_fallback_secret_used_when_profile_has_none() {
        let service = service(Ok(Some(stored_profile(None))), Some("env-secret"));

        let result = service
            .execute(LoginData {
                password: "env-secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.token, "session-token");
    }

    #[tokio::test]
    async fn test_fallback_secret_used_when_no_profile_exists() {
        let service = service(Ok(None), Some("env-secret"));

        let result = service
            .execute(LoginData {
                password: "env-secret".to_string(),
            })
            .await
            .unwrap();

        // Without a profile there is no stored email either.
        assert_eq!(result.user, AdminUser::default());
    }

    #[tokio::test]
    async fn test_no_secret_anywhere_is_invalid_credentials() {
        let service = service(Ok(None), None);

        let err = service
            .execute(LoginData {
                password: "anything".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_repository_error_is_propagated() {
        let service = service(
            Err(ProfileRepositoryError::StoreError("store down".to_string())),
            Some("env-secret"),
        );

        let err = service
            .execute(LoginData {
                password: "env-secret".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::RepositoryError(_)));
    }
}
