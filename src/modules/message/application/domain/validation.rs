use std::collections::BTreeMap;

use email_address::EmailAddress;

/// Contact-form checks, enforced before any store call. Limits mirror
/// what the public form shows inline.
pub fn validate_message_fields(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    let name_len = name.trim().len();
    if name_len < 2 || name_len > 100 {
        errors.insert(
            "name".to_string(),
            "Name must be between 2 and 100 characters".to_string(),
        );
    }

    if !EmailAddress::is_valid(email) {
        errors.insert("email".to_string(), "Invalid email address".to_string());
    }

    let subject_len = subject.trim().len();
    if subject_len < 5 || subject_len > 100 {
        errors.insert(
            "subject".to_string(),
            "Subject must be between 5 and 100 characters".to_string(),
        );
    }

    let message_len = message.trim().len();
    if message_len < 10 || message_len > 5000 {
        errors.insert(
            "message".to_string(),
            "Message must be between 10 and 5000 characters".to_string(),
        );
    }

    errors
}
