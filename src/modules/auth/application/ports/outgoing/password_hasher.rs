use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),

    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),
}

/// Outgoing port for the admin secret. Hashing is CPU-bound, so
/// implementations run it off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a mismatch; `Err` only for malformed hashes or
    /// hasher failures.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
