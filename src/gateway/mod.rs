//! # Document Gateway
//!
//! One CRUD action per call against the store abstraction, with the result
//! shaped into caller-safe form: internal bookkeeping fields stripped,
//! partial updates shallow-merged, delete reporting the surviving set.

use serde::Serialize;
use serde_json::Value;

use crate::store::{Document, DocumentStore, StoreError, StoreResult};

/// Maximum number of documents a single list returns.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Keys starting with this prefix are store bookkeeping, never exposed.
pub const INTERNAL_FIELD_PREFIX: char = '_';

/// Result of a partial update: the document as it was before the merge
/// (stripped) and the store's post-upsert representation (not stripped).
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePair {
    pub previous: Document,
    pub current: Document,
}

/// Result of a delete: the id that was removed and the documents that
/// remain in the container (up to the default list limit).
#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcome {
    pub items: Vec<Document>,
    pub deleted: String,
}

/// Remove every internal field from a document.
///
/// A pure filter over key prefixes; non-object values pass through.
pub fn strip_internal(document: Document) -> Document {
    match document {
        Value::Object(obj) => Value::Object(
            obj.into_iter()
                .filter(|(key, _)| !key.starts_with(INTERNAL_FIELD_PREFIX))
                .collect(),
        ),
        other => other,
    }
}

/// Shallow-merge `changes` into `base`: every top-level key in `changes`
/// overwrites the corresponding key in `base`; nested objects are replaced
/// wholesale, not merged. Non-object `changes` are ignored.
fn shallow_merge(base: &mut Document, changes: &Document) {
    if let (Some(base_obj), Some(changes_obj)) = (base.as_object_mut(), changes.as_object()) {
        for (key, value) in changes_obj {
            base_obj.insert(key.clone(), value.clone());
        }
    }
}

/// Document gateway over a store handle, scoped to one request.
pub struct Gateway<'s> {
    store: &'s dyn DocumentStore,
}

impl<'s> Gateway<'s> {
    pub fn new(store: &'s dyn DocumentStore) -> Self {
        Self { store }
    }

    /// List up to `max_count` documents, each stripped of internal fields.
    /// Order is whatever the store returns; no guarantee beyond that.
    pub fn list_items(&self, max_count: usize) -> StoreResult<Vec<Document>> {
        let items = self.store.list(max_count)?;
        Ok(items.into_iter().map(strip_internal).collect())
    }

    /// Read one document by id, stripped of internal fields.
    pub fn read_item(&self, id: &str) -> StoreResult<Document> {
        let document = self.store.get(id)?;
        Ok(strip_internal(document))
    }

    /// Insert a new document and return the store's representation,
    /// stripped of internal fields.
    ///
    /// The one operation with explicit error capture: a store failure is
    /// converted into a single human-readable reason built from the first
    /// line of the store's message plus its symbolic code and numeric
    /// status. Every other operation propagates store errors untouched.
    pub fn create_item(&self, body: Document) -> StoreResult<Document> {
        match self.store.insert(body) {
            Ok(created) => Ok(strip_internal(created)),
            Err(err) => {
                let first_line = err.to_string();
                let first_line = first_line.lines().next().unwrap_or_default().to_string();
                let message = format!("{} ({}, {})", first_line, err.code(), err.status());
                Err(StoreError::Request {
                    status: err.status(),
                    code: err.code().to_string(),
                    message,
                })
            }
        }
    }

    /// Shallow-merge `changes` into the document keyed by `id` and upsert
    /// the result.
    ///
    /// The current document is read once and cloned for the `previous`
    /// snapshot, so snapshot and merge base always observe the same
    /// revision. `previous` is stripped; `current` is the store's
    /// post-upsert representation as-is.
    pub fn update_item(&self, id: &str, changes: Document) -> StoreResult<UpdatePair> {
        let base = self.store.get(id)?;
        let previous = strip_internal(base.clone());

        let mut merged = base;
        shallow_merge(&mut merged, &changes);

        let current = self.store.upsert(merged)?;
        Ok(UpdatePair { previous, current })
    }

    /// Delete the document keyed by `id`, then report what remains.
    pub fn delete_item(&self, id: &str) -> StoreResult<DeleteOutcome> {
        self.store.delete(id)?;
        let items = self.list_items(DEFAULT_LIST_LIMIT)?;
        Ok(DeleteOutcome {
            items,
            deleted: id.to_string(),
        })
    }
}
