use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::outgoing::profile_repository::{
    NewProfile, ProfilePatch, ProfileRepository, ProfileRepositoryError, StoredProfile,
};
use crate::shared::store::{collections, Document, DocumentStore};

/// Field under which the admin secret hash lives inside the document.
/// It is stripped out before the entity ever reaches a serializer.
const ADMIN_PASSWORD_FIELD: &str = "adminPassword";

#[derive(Clone)]
pub struct ProfileRepositoryMemory {
    store: Arc<DocumentStore>,
}

impl ProfileRepositoryMemory {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    fn to_stored(doc: &Document) -> Result<StoredProfile, ProfileRepositoryError> {
        let mut value = doc.to_value();
        let admin_password_hash = value
            .as_object_mut()
            .and_then(|obj| obj.remove(ADMIN_PASSWORD_FIELD))
            .and_then(|v| v.as_str().map(|s| s.to_string()));

        let profile: Profile = serde_json::from_value(value)
            .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;

        Ok(StoredProfile {
            profile,
            admin_password_hash,
        })
    }

    fn first_doc(&self) -> Result<Option<Document>, ProfileRepositoryError> {
        let docs = self
            .store
            .list(collections::PROFILE)
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;
        Ok(docs.into_iter().next())
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryMemory {
    async fn get(&self) -> Result<Option<StoredProfile>, ProfileRepositoryError> {
        match self.first_doc()? {
            Some(doc) => Ok(Some(Self::to_stored(&doc)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, data: NewProfile) -> Result<StoredProfile, ProfileRepositoryError> {
        if self.first_doc()?.is_some() {
            return Err(ProfileRepositoryError::AlreadyExists);
        }

        let profile = Profile {
            id: 0,
            name: data.name,
            title: data.title,
            bio: data.bio,
            about_me: data.about_me,
            email: data.email,
            phone: data.phone,
            location: data.location,
            avatar: data.avatar,
            cv: data.cv,
            social_links: data.social_links,
            about_content: data.about_content,
        };

        let mut body = serde_json::to_value(&profile)
            .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;
        if let (Some(obj), Some(hash)) = (body.as_object_mut(), data.admin_password_hash) {
            obj.insert(ADMIN_PASSWORD_FIELD.to_string(), Value::String(hash));
        }

        let doc = self
            .store
            .insert(collections::PROFILE, body)
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?;

        Self::to_stored(&doc)
    }

    async fn update(&self, data: ProfilePatch) -> Result<StoredProfile, ProfileRepositoryError> {
        let Some(existing) = self.first_doc()? else {
            return Err(ProfileRepositoryError::NotFound);
        };

        let mut patch = serde_json::Map::new();
        if let Some(v) = data.name {
            patch.insert("name".to_string(), Value::String(v));
        }
        if let Some(v) = data.title {
            patch.insert("title".to_string(), Value::String(v));
        }
        if let Some(v) = data.bio {
            patch.insert("bio".to_string(), Value::String(v));
        }
        if let Some(v) = data.about_me {
            patch.insert("aboutMe".to_string(), Value::String(v));
        }
        if let Some(v) = data.email {
            patch.insert("email".to_string(), Value::String(v));
        }
        if let Some(v) = data.phone {
            patch.insert("phone".to_string(), Value::String(v));
        }
        if let Some(v) = data.location {
            patch.insert("location".to_string(), Value::String(v));
        }
        if let Some(v) = data.avatar {
            patch.insert("avatar".to_string(), Value::String(v));
        }
        if let Some(v) = data.cv {
            patch.insert("cv".to_string(), Value::String(v));
        }
        if let Some(v) = data.social_links {
            let links = serde_json::to_value(v)
                .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;
            patch.insert("socialLinks".to_string(), links);
        }
        if let Some(v) = data.about_content {
            let content = serde_json::to_value(v)
                .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;
            patch.insert("aboutContent".to_string(), content);
        }
        if let Some(v) = data.admin_password_hash {
            patch.insert(ADMIN_PASSWORD_FIELD.to_string(), Value::String(v));
        }

        let updated = self
            .store
            .merge(collections::PROFILE, existing.id, Value::Object(patch))
            .map_err(|e| ProfileRepositoryError::StoreError(e.to_string()))?
            .ok_or(ProfileRepositoryError::NotFound)?;

        Self::to_stored(&updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::SocialLink;

    fn new_profile(secret: Option<&str>) -> NewProfile {
        NewProfile {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "First programmer, long before it was cool.".to_string(),
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
            admin_password_hash: secret.map(|s| s.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let repo = ProfileRepositoryMemory::new(Arc::new(DocumentStore::new()));

        repo.create(new_profile(Some("$argon2id$fake"))).await.unwrap();
        let stored = repo.get().await.unwrap().unwrap();

        assert_eq!(stored.profile.name, "Ada Lovelace");
        assert_eq!(stored.profile.social_links.len(), 1);
        assert_eq!(stored.admin_password_hash.as_deref(), Some("$argon2id$fake"));
    }

    #[tokio::test]
    async fn test_secret_is_not_part_of_the_public_entity() {
        let repo = ProfileRepositoryMemory::new(Arc::new(DocumentStore::new()));

        repo.create(new_profile(Some("$argon2id$fake"))).await.unwrap();
        let stored = repo.get().await.unwrap().unwrap();

        let serialized = serde_json::to_value(&stored.profile).unwrap();
        assert!(serialized.get("adminPassword").is_none());
    }

    #[tokio::test]
    async fn test_second_create_is_a_conflict() {
        let repo = ProfileRepositoryMemory::new(Arc::new(DocumentStore::new()));

        repo.create(new_profile(None)).await.unwrap();
        let err = repo.create(new_profile(None)).await.unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_partial_update_keeps_omitted_fields_and_secret() {
        let repo = ProfileRepositoryMemory::new(Arc::new(DocumentStore::new()));
        repo.create(new_profile(Some("$argon2id$fake"))).await.unwrap();

        let updated = repo
            .update(ProfilePatch {
                title: Some("Countess of Computing".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.profile.title, "Countess of Computing");
        assert_eq!(updated.profile.name, "Ada Lovelace");
        assert_eq!(
            updated.admin_password_hash.as_deref(),
            Some("$argon2id$fake")
        );
    }

    #[tokio::test]
    async fn test_update_without_profile_is_not_found() {
        let repo = ProfileRepositoryMemory::new(Arc::new(DocumentStore::new()));

        let err = repo.update(ProfilePatch::default()).await.unwrap_err();

        assert!(matches!(err, ProfileRepositoryError::NotFound));
    }
}
