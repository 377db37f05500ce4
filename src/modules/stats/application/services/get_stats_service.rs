use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::modules::certification::application::ports::outgoing::certification_repository::CertificationRepository;
use crate::modules::education::application::ports::outgoing::education_repository::EducationRepository;
use crate::modules::message::application::ports::outgoing::message_repository::MessageRepository;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectListFilter, ProjectRepository,
};
use crate::modules::stats::application::domain::entities::{StatsView, TechnologyCount};
use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

/// Recomputes the summary from the raw collections on every call; the
/// store is small enough that nothing is cached or precomputed.
pub struct GetStatsService {
    projects: Arc<dyn ProjectRepository + Send + Sync>,
    certifications: Arc<dyn CertificationRepository + Send + Sync>,
    education: Arc<dyn EducationRepository + Send + Sync>,
    messages: Arc<dyn MessageRepository + Send + Sync>,
}

impl GetStatsService {
    pub fn new(
        projects: Arc<dyn ProjectRepository + Send + Sync>,
        certifications: Arc<dyn CertificationRepository + Send + Sync>,
        education: Arc<dyn EducationRepository + Send + Sync>,
        messages: Arc<dyn MessageRepository + Send + Sync>,
    ) -> Self {
        Self {
            projects,
            certifications,
            education,
            messages,
        }
    }
}

/// Counts how many projects reference each technology. Ties keep their
/// first-encounter order because the sort is stable.
pub fn technology_histogram(projects: &[Project]) -> Vec<TechnologyCount> {
    let mut order: Vec<TechnologyCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for project in projects {
        for tech in &project.technologies {
            match index.get(tech) {
                Some(&i) => order[i].count += 1,
                None => {
                    index.insert(tech.clone(), order.len());
                    order.push(TechnologyCount {
                        name: tech.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
}

#[async_trait]
impl GetStatsUseCase for GetStatsService {
    async fn execute(&self) -> StatsView {
        let projects = match self.projects.list(ProjectListFilter::default()).await {
            Ok(projects) => projects,
            Err(e) => {
                warn!("stats: projects unavailable, counting zero: {}", e);
                Vec::new()
            }
        };

        let total_projects = match self.projects.count().await {
            Ok(count) => count,
            Err(e) => {
                warn!("stats: project count unavailable: {}", e);
                0
            }
        };
        let total_certifications = match self.certifications.count().await {
            Ok(count) => count,
            Err(e) => {
                warn!("stats: certification count unavailable: {}", e);
                0
            }
        };
        let total_education = match self.education.count().await {
            Ok(count) => count,
            Err(e) => {
                warn!("stats: education count unavailable: {}", e);
                0
            }
        };
        let total_messages = match self.messages.count().await {
            Ok(count) => count,
            Err(e) => {
                warn!("stats: message count unavailable: {}", e);
                0
            }
        };

        StatsView {
            total_projects,
            total_certifications,
            total_education,
            total_messages,
            technologies: technology_histogram(&projects),
        }
    }
}
