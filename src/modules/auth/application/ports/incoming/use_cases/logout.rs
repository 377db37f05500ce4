use async_trait::async_trait;

/// Revokes the session identified by `jti`. Revocation of an unknown or
/// already-revoked id is a no-op, so there is nothing to fail with.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, jti: &str);
}
