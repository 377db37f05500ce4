/// Logout works by revoking the token's `jti`. The list is process-local
/// and synchronous: with a single admin session there is nothing to
/// coordinate across processes.
pub trait TokenRevocationList: Send + Sync {
    fn revoke(&self, jti: &str);

    fn is_revoked(&self, jti: &str) -> bool;
}
