use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::auth::application::ports::incoming::use_cases::LogoutUseCase;
use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LogoutService {
    revocation_list: Arc<dyn TokenRevocationList + Send + Sync>,
}

impl LogoutService {
    pub fn new(revocation_list: Arc<dyn TokenRevocationList + Send + Sync>) -> Self {
        Self { revocation_list }
    }
}

#[async_trait]
impl LogoutUseCase for LogoutService {
    async fn execute(&self, jti: &str) {
        self.revocation_list.revoke(jti);
        info!("admin session revoked");
    }
}
