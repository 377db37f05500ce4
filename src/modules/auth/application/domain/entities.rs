use serde::{Deserialize, Serialize};

/// There is exactly one admin account. Its id is fixed; the email shown in
/// the session record comes from the profile document when one exists.
pub const ADMIN_USER_ID: &str = "1";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@portfolio.com";

/// Minimal user record persisted alongside the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

impl AdminUser {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            id: ADMIN_USER_ID.to_string(),
            email: email.into(),
        }
    }
}

impl Default for AdminUser {
    fn default() -> Self {
        Self::with_email(DEFAULT_ADMIN_EMAIL)
    }
}
