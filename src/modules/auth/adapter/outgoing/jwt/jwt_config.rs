use anyhow::Result;

use crate::shared::config::require_env;

/// 30 days. The original admin sessions never expired at all; this is the
/// bounded server-side equivalent.
const DEFAULT_SESSION_TOKEN_EXPIRY: i64 = 30 * 24 * 3600;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
    /// Seconds until a session token expires.
    pub session_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio-api".to_string()),
            secret_key: require_env("JWT_SECRET_KEY")?,
            session_token_expiry: std::env::var("SESSION_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_TOKEN_EXPIRY),
        })
    }
}
