use std::collections::BTreeMap;

use crate::modules::profile::application::domain::validation::is_image_ref;

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Form checks applied before any store call, mirroring what the admin
/// panel enforces inline.
pub fn validate_project_fields(
    title: &str,
    description: &str,
    image: &str,
    technologies: &[String],
    github_url: Option<&str>,
    live_url: Option<&str>,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if title.trim().is_empty() || title.len() > 100 {
        errors.insert(
            "title".to_string(),
            "Title must be between 1 and 100 characters".to_string(),
        );
    }

    if description.trim().len() < 10 || description.len() > 1000 {
        errors.insert(
            "description".to_string(),
            "Description must be between 10 and 1000 characters".to_string(),
        );
    }

    if !image.is_empty() && !is_image_ref(image) {
        errors.insert("image".to_string(), "Invalid image URL".to_string());
    }

    if technologies.iter().filter(|t| !t.trim().is_empty()).count() == 0 {
        errors.insert(
            "technologies".to_string(),
            "At least one technology is required".to_string(),
        );
    }

    if let Some(url) = github_url {
        if !url.is_empty() && !is_http_url(url) {
            errors.insert("githubUrl".to_string(), "Invalid GitHub URL".to_string());
        }
    }

    if let Some(url) = live_url {
        if !url.is_empty() && !is_http_url(url) {
            errors.insert("liveUrl".to_string(), "Invalid URL".to_string());
        }
    }

    errors
}
