use chrono::{TimeZone, Utc};

use crate::modules::profile::application::domain::entities::{Profile, SocialLink};
use crate::modules::project::application::domain::entities::{Project, ProjectCategory};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;

pub fn sample_profile() -> Profile {
    Profile {
        id: 1,
        name: "Ada Lovelace".to_string(),
        title: "Software Engineer".to_string(),
        bio: "Building things for the web since before the web.".to_string(),
        about_me: None,
        email: "ada@example.com".to_string(),
        phone: "+4420123456789".to_string(),
        location: "London".to_string(),
        avatar: "https://example.com/ada.png".to_string(),
        cv: None,
        social_links: vec![SocialLink {
            platform: "github".to_string(),
            url: "https://github.com/ada".to_string(),
        }],
        about_content: None,
    }
}

pub fn sample_project(id: i64) -> Project {
    sample_project_with_technologies(id, &["React", "Django"])
}

pub fn sample_project_with_technologies(id: i64, technologies: &[&str]) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        description: "A sample project used across the test suite.".to_string(),
        image: "https://example.com/shot.png".to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github_url: Some("https://github.com/x/y".to_string()),
        live_url: None,
        category: ProjectCategory::Web,
        featured: false,
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn sample_project_data() -> ProjectData {
    ProjectData {
        title: "Weather App".to_string(),
        description: "Shows the weather, with style.".to_string(),
        image: "https://example.com/shot.png".to_string(),
        technologies: vec!["React".to_string()],
        github_url: None,
        live_url: None,
        category: ProjectCategory::Web,
        featured: false,
    }
}
