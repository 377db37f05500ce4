pub mod document_store;
pub mod envelope;
pub mod seed;

pub use document_store::{collections, Document, DocumentStore, StoreError};
