use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed category set; anything else is rejected at the serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Data,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}
