// src/shared/store/document_store.rs
//
// In-memory schemaless document store backing every repository adapter.
// One writer at a time (single admin); last write wins. Documents keep
// their collection insertion order, ids are sequential per collection.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::RwLock;

pub mod collections {
    pub const PROFILE: &str = "profile";
    pub const PROJECTS: &str = "projects";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const EDUCATION: &str = "education";
    pub const MESSAGES: &str = "messages";
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("document body must be a JSON object")]
    NotAnObject,

    #[error("store lock poisoned")]
    Poisoned,
}

//
// ──────────────────────────────────────────────────────────
// Documents
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct Document {
    pub id: i64,
    body: Map<String, Value>,
}

impl Document {
    /// Body with the store-assigned id injected, ready for serde.
    pub fn to_value(&self) -> Value {
        let mut out = self.body.clone();
        out.insert("id".to_string(), Value::from(self.id));
        Value::Object(out)
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

#[derive(Default)]
struct Collection {
    next_id: i64,
    documents: Vec<Document>,
}

//
// ──────────────────────────────────────────────────────────
// Store
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct DocumentStore {
    inner: RwLock<HashMap<String, Collection>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default())
    }

    pub fn get(&self, collection: &str, id: i64) -> Result<Option<Document>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .get(collection)
            .and_then(|c| c.documents.iter().find(|d| d.id == id).cloned()))
    }

    pub fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.get(collection).map(|c| c.documents.len()).unwrap_or(0))
    }

    pub fn insert(&self, collection: &str, body: Value) -> Result<Document, StoreError> {
        let mut body = into_object(body)?;
        // The store owns identity; an incoming id is discarded.
        body.remove("id");

        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let coll = inner.entry(collection.to_string()).or_default();
        coll.next_id += 1;
        let doc = Document {
            id: coll.next_id,
            body,
        };
        coll.documents.push(doc.clone());
        Ok(doc)
    }

    /// Replace the whole body, keeping the id. `None` when absent.
    pub fn replace(
        &self,
        collection: &str,
        id: i64,
        body: Value,
    ) -> Result<Option<Document>, StoreError> {
        let mut body = into_object(body)?;
        body.remove("id");

        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(coll) = inner.get_mut(collection) else {
            return Ok(None);
        };
        match coll.documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.body = body;
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    /// Shallow top-level merge (PATCH semantics). `None` when absent.
    pub fn merge(
        &self,
        collection: &str,
        id: i64,
        patch: Value,
    ) -> Result<Option<Document>, StoreError> {
        let mut patch = into_object(patch)?;
        patch.remove("id");

        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(coll) = inner.get_mut(collection) else {
            return Ok(None);
        };
        match coll.documents.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                for (key, value) in patch {
                    doc.body.insert(key, value);
                }
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    pub fn remove(&self, collection: &str, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(coll) = inner.get_mut(collection) else {
            return Ok(false);
        };
        let before = coll.documents.len();
        coll.documents.retain(|d| d.id != id);
        Ok(coll.documents.len() < before)
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_assigns_sequential_ids_per_collection() {
        let store = DocumentStore::new();

        let a = store.insert("projects", json!({"title": "a"})).unwrap();
        let b = store.insert("projects", json!({"title": "b"})).unwrap();
        let other = store.insert("messages", json!({"subject": "x"})).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(other.id, 1, "id sequences are independent per collection");
    }

    #[test]
    fn test_insert_discards_client_supplied_id() {
        let store = DocumentStore::new();

        let doc = store
            .insert("projects", json!({"id": 999, "title": "a"}))
            .unwrap();

        assert_eq!(doc.id, 1);
        assert_eq!(doc.to_value()["id"], 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = DocumentStore::new();
        for school in ["first", "second", "third"] {
            store
                .insert("education", json!({"school": school}))
                .unwrap();
        }

        let listed: Vec<String> = store
            .list("education")
            .unwrap()
            .iter()
            .map(|d| d.body()["school"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(listed, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_replace_swaps_whole_body() {
        let store = DocumentStore::new();
        let doc = store
            .insert("projects", json!({"title": "a", "featured": true}))
            .unwrap();

        let updated = store
            .replace("projects", doc.id, json!({"title": "b"}))
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, doc.id);
        assert_eq!(updated.body()["title"], "b");
        assert!(
            !updated.body().contains_key("featured"),
            "replace must not keep old fields"
        );
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let store = DocumentStore::new();
        let doc = store
            .insert("messages", json!({"subject": "hi", "read": false}))
            .unwrap();

        let patched = store
            .merge("messages", doc.id, json!({"read": true}))
            .unwrap()
            .unwrap();

        assert_eq!(patched.body()["read"], true);
        assert_eq!(patched.body()["subject"], "hi");
    }

    #[test]
    fn test_remove_reports_presence() {
        let store = DocumentStore::new();
        let doc = store.insert("projects", json!({"title": "a"})).unwrap();

        assert!(store.remove("projects", doc.id).unwrap());
        assert!(!store.remove("projects", doc.id).unwrap());
        assert_eq!(store.count("projects").unwrap(), 0);
    }

    #[test]
    fn test_non_object_body_rejected() {
        let store = DocumentStore::new();

        let err = store.insert("projects", json!([1, 2, 3])).unwrap_err();

        assert!(matches!(err, StoreError::NotAnObject));
    }

    #[test]
    fn test_missing_collection_reads_as_empty() {
        let store = DocumentStore::new();

        assert!(store.list("certifications").unwrap().is_empty());
        assert_eq!(store.count("certifications").unwrap(), 0);
        assert!(store.get("certifications", 1).unwrap().is_none());
    }
}
