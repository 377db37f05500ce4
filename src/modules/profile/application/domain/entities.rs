use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Profile (singleton document)
// ──────────────────────────────────────────────────────────
// Wire names are camelCase, matching what the public site and the admin
// panel were built against. The admin secret is NOT part of this entity:
// it is split off at the repository boundary and never serialized out.
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutStats {
    #[serde(default)]
    pub projects: i64,
    #[serde(default)]
    pub clients: i64,
    #[serde(default)]
    pub experience: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueStatement {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Long-form content for the about page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub who_am_i: String,
    #[serde(default)]
    pub approach: String,
    #[serde(default)]
    pub hobby: String,
    #[serde(default)]
    pub stats: AboutStats,
    #[serde(default)]
    pub values: Vec<ValueStatement>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: String,
    /// URL or data URL of the downloadable CV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_content: Option<AboutContent>,
}
