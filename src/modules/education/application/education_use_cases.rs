use std::sync::Arc;

use crate::modules::education::application::ports::incoming::use_cases::{
    CreateEducationUseCase, DeleteEducationUseCase, GetEducationListUseCase,
    GetSingleEducationUseCase, UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub get_list: Arc<dyn GetEducationListUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleEducationUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
