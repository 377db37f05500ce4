use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TechnologyCount {
    #[schema(example = "React")]
    pub name: String,
    #[schema(example = 4)]
    pub count: usize,
}

/// Summary served by `/api/stats`: per-collection totals plus the
/// technology-usage histogram over all projects.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub total_projects: usize,
    pub total_certifications: usize,
    pub total_education: usize,
    pub total_messages: usize,
    pub technologies: Vec<TechnologyCount>,
}
