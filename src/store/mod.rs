//! # Document Store Abstraction
//!
//! The facade talks to an opaque key-value/document service through the
//! [`DocumentStore`] trait. The partition key is always the document's
//! `id` field. Nothing above this module knows which store implementation
//! is wired in.

pub mod errors;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;

use serde_json::Value;

/// A stored document: a JSON object carrying a unique string `id` field.
pub type Document = Value;

/// Document store collaborator interface.
///
/// Implementations must be shareable across concurrent requests; the
/// facade holds one long-lived handle for the process lifetime.
pub trait DocumentStore: Send + Sync {
    /// List up to `max_count` documents in store-native order.
    fn list(&self, max_count: usize) -> StoreResult<Vec<Document>>;

    /// Fetch the document whose id and partition key equal `id`.
    fn get(&self, id: &str) -> StoreResult<Document>;

    /// Insert a new document. Fails with a conflict if the id exists.
    /// Returns the store's representation, internal fields included.
    fn insert(&self, document: Document) -> StoreResult<Document>;

    /// Insert or replace a document by id. Returns the store's
    /// representation, internal fields included.
    fn upsert(&self, document: Document) -> StoreResult<Document>;

    /// Delete the document keyed by `id`.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Create the database if it does not exist.
    fn ensure_database(&self, name: &str) -> StoreResult<()>;

    /// Create the container if it does not exist.
    fn ensure_container(&self, name: &str, partition_key_path: &str) -> StoreResult<()>;
}
