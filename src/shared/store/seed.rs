// src/shared/store/seed.rs
//
// Populates the document store from a db.json fixture at startup.
// Collections may appear as bare arrays or `{results: [...]}` envelopes;
// the profile may also be a bare object. A plaintext adminPassword in the
// fixture is hashed before the document is stored.

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::shared::store::envelope::{ListShape, SingletonShape};
use crate::shared::store::{collections, DocumentStore};

#[derive(Debug, Default, Clone, Copy)]
pub struct SeedSummary {
    pub profiles: usize,
    pub projects: usize,
    pub certifications: usize,
    pub education: usize,
    pub messages: usize,
}

pub async fn load_seed_file(
    path: &Path,
    store: &DocumentStore,
    hasher: &dyn PasswordHasher,
) -> Result<SeedSummary> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let data: Value = serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not valid JSON", path.display()))?;

    let mut summary = SeedSummary::default();

    if let Some(profile_value) = data.get("profile") {
        let shape: SingletonShape<Value> = serde_json::from_value(profile_value.clone())
            .context("profile section has an unrecognized shape")?;

        if let Some(mut profile) = shape.into_first() {
            if let Some(obj) = profile.as_object_mut() {
                if let Some(secret) = obj.get("adminPassword").and_then(Value::as_str) {
                    // Already-hashed fixtures pass through untouched.
                    if !secret.starts_with("$argon2") {
                        let hash = hasher
                            .hash_password(secret)
                            .await
                            .map_err(|e| anyhow!("failed to hash seed admin password: {}", e))?;
                        obj.insert("adminPassword".to_string(), Value::String(hash));
                    }
                }
            }
            store.insert(collections::PROFILE, profile)?;
            summary.profiles = 1;
        }
    }

    summary.projects = insert_collection(
        store,
        collections::PROJECTS,
        data.get("projects"),
        with_created_at,
    )?;
    summary.certifications = insert_collection(
        store,
        collections::CERTIFICATIONS,
        data.get("certifications"),
        no_defaults,
    )?;
    summary.education = insert_collection(
        store,
        collections::EDUCATION,
        data.get("education"),
        no_defaults,
    )?;
    summary.messages = insert_collection(
        store,
        collections::MESSAGES,
        data.get("messages"),
        with_message_defaults,
    )?;

    info!(
        "seeded store from {}: {} profile, {} projects, {} certifications, {} education, {} messages",
        path.display(),
        summary.profiles,
        summary.projects,
        summary.certifications,
        summary.education,
        summary.messages
    );

    Ok(summary)
}

fn insert_collection(
    store: &DocumentStore,
    collection: &str,
    value: Option<&Value>,
    apply_defaults: fn(&mut serde_json::Map<String, Value>),
) -> Result<usize> {
    let Some(value) = value else {
        return Ok(0);
    };

    let shape: ListShape<Value> = serde_json::from_value(value.clone())
        .with_context(|| format!("{} section has an unrecognized shape", collection))?;

    let mut inserted = 0;
    for mut item in shape.into_items() {
        if let Some(obj) = item.as_object_mut() {
            apply_defaults(obj);
        }
        store.insert(collection, item)?;
        inserted += 1;
    }
    Ok(inserted)
}

fn no_defaults(_obj: &mut serde_json::Map<String, Value>) {}

fn with_created_at(obj: &mut serde_json::Map<String, Value>) {
    obj.entry("createdAt".to_string())
        .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
}

fn with_message_defaults(obj: &mut serde_json::Map<String, Value>) {
    with_created_at(obj);
    obj.entry("read".to_string()).or_insert(Value::Bool(false));
}
