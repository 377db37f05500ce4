use std::collections::BTreeMap;
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;

/// http(s) URL or inline data URL; avatars can be either.
fn image_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://\S+|data:image/[a-zA-Z+.-]+;base64,)").expect("valid regex")
    })
}

pub fn is_image_ref(value: &str) -> bool {
    image_ref_pattern().is_match(value)
}

/// Profile fields as submitted; `None` means "not part of this write".
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileFields<'a> {
    pub name: Option<&'a str>,
    pub title: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub location: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

/// Validates supplied fields only; a partial update leaves the rest alone.
pub fn validate_profile_fields(fields: ProfileFields<'_>) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if let Some(name) = fields.name {
        if name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
    }

    if let Some(title) = fields.title {
        if title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
    }

    if let Some(bio) = fields.bio {
        if bio.trim().len() < 10 {
            errors.insert(
                "bio".to_string(),
                "Bio must be at least 10 characters".to_string(),
            );
        }
    }

    if let Some(email) = fields.email {
        if !EmailAddress::is_valid(email) {
            errors.insert("email".to_string(), "Invalid email address".to_string());
        }
    }

    if let Some(phone) = fields.phone {
        if phone.trim().len() < 10 {
            errors.insert("phone".to_string(), "Invalid phone number".to_string());
        }
    }

    if let Some(location) = fields.location {
        if location.trim().is_empty() {
            errors.insert("location".to_string(), "Location is required".to_string());
        }
    }

    if let Some(avatar) = fields.avatar {
        if !is_image_ref(avatar) {
            errors.insert("avatar".to_string(), "Invalid image URL".to_string());
        }
    }

    errors
}
