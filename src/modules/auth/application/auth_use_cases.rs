use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    CheckSessionUseCase, LoginUseCase, LogoutUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub check_session: Arc<dyn CheckSessionUseCase + Send + Sync>,
}
