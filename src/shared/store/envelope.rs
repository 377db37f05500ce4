// src/shared/store/envelope.rs
//
// The REST surface historically served both bare arrays and DRF-style
// `{results: [...]}` envelopes depending on the deployment. Every consumer
// of such payloads (here: the seed loader) goes through this module instead
// of re-implementing the shape check at each call site.

use serde::{Deserialize, Serialize};

/// List response envelope emitted by this service: `{count, results}`.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for Paginated<T> {
    fn from(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// A collection payload in either accepted shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListShape<T> {
    Enveloped { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListShape<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListShape::Enveloped { results } => results,
            ListShape::Bare(items) => items,
        }
    }
}

/// A singleton payload: bare object, bare array, or envelope.
/// The first element is authoritative when a list shape is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SingletonShape<T> {
    Enveloped { results: Vec<T> },
    Many(Vec<T>),
    One(T),
}

impl<T> SingletonShape<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            SingletonShape::Enveloped { results } => results.into_iter().next(),
            SingletonShape::Many(items) => items.into_iter().next(),
            SingletonShape::One(item) => Some(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_list_shape_bare_and_enveloped_normalize_identically() {
        let bare: ListShape<Value> =
            serde_json::from_value(json!([{"title": "a"}, {"title": "b"}])).unwrap();
        let enveloped: ListShape<Value> =
            serde_json::from_value(json!({"count": 2, "results": [{"title": "a"}, {"title": "b"}]}))
                .unwrap();

        assert_eq!(bare.into_items(), enveloped.into_items());
    }

    #[test]
    fn test_list_shape_empty_envelope() {
        let shape: ListShape<Value> =
            serde_json::from_value(json!({"results": []})).unwrap();

        assert!(shape.into_items().is_empty());
    }

    #[test]
    fn test_singleton_first_element_is_authoritative() {
        let from_object: SingletonShape<Value> =
            serde_json::from_value(json!({"name": "Ada"})).unwrap();
        let from_array: SingletonShape<Value> =
            serde_json::from_value(json!([{"name": "Ada"}, {"name": "Grace"}])).unwrap();
        let from_envelope: SingletonShape<Value> =
            serde_json::from_value(json!({"results": [{"name": "Ada"}]})).unwrap();

        for shape in [from_object, from_array, from_envelope] {
            assert_eq!(shape.into_first().unwrap()["name"], "Ada");
        }
    }

    #[test]
    fn test_singleton_empty_list_is_none() {
        let shape: SingletonShape<Value> = serde_json::from_value(json!([])).unwrap();

        assert!(shape.into_first().is_none());
    }

    #[test]
    fn test_paginated_serializes_count_and_results() {
        let page: Paginated<Value> = vec![json!({"id": 1}), json!({"id": 2})].into();

        let out = serde_json::to_value(&page).unwrap();

        assert_eq!(out["count"], 2);
        assert_eq!(out["results"].as_array().unwrap().len(), 2);
    }
}
