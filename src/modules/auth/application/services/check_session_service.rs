use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::AdminUser;
use crate::modules::auth::application::ports::incoming::use_cases::{
    CheckSessionError, CheckSessionUseCase, SessionInfo,
};
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, SESSION_TOKEN_TYPE,
};
use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CheckSessionService {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    revocation_list: Arc<dyn TokenRevocationList + Send + Sync>,
}

impl CheckSessionService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        revocation_list: Arc<dyn TokenRevocationList + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            revocation_list,
        }
    }
}

#[async_trait]
impl CheckSessionUseCase for CheckSessionService {
    async fn execute(&self, token: &str) -> Result<SessionInfo, CheckSessionError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| CheckSessionError::InvalidToken)?;

        if claims.token_type != SESSION_TOKEN_TYPE {
            return Err(CheckSessionError::InvalidToken);
        }

        if self.revocation_list.is_revoked(&claims.jti) {
            return Err(CheckSessionError::Revoked);
        }

        Ok(SessionInfo {
            user: AdminUser {
                id: claims.sub,
                email: claims.email,
            },
            jti: claims.jti,
        })
    }
}
