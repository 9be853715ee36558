//! # In-Memory Document Store
//!
//! A process-local [`DocumentStore`] for tests and local serving. It
//! mimics the remote store's observable behavior: documents are keyed by
//! their `id` field, and every write comes back decorated with the
//! store's internal bookkeeping fields (`_rid`, `_etag`, `_self`, `_ts`,
//! `_attachments`).

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use super::{Document, DocumentStore};

#[derive(Debug, Default)]
struct Inner {
    database: Option<String>,
    container: Option<String>,
    docs: BTreeMap<String, Value>,
}

/// In-memory document store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the required string `id` field from a document.
    fn doc_id(document: &Value) -> StoreResult<String> {
        document
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                StoreError::bad_request("document is missing the required string field 'id'")
            })
    }

    /// Decorate a document with the store's bookkeeping fields.
    fn stamp(inner: &Inner, id: &str, mut document: Value) -> Value {
        let database = inner.database.as_deref().unwrap_or("db");
        let container = inner.container.as_deref().unwrap_or("coll");
        if let Some(obj) = document.as_object_mut() {
            obj.insert("_rid".to_string(), json!(Uuid::new_v4().simple().to_string()));
            obj.insert("_etag".to_string(), json!(format!("\"{}\"", Uuid::new_v4())));
            obj.insert(
                "_self".to_string(),
                json!(format!("dbs/{database}/colls/{container}/docs/{id}/")),
            );
            obj.insert("_ts".to_string(), json!(Utc::now().timestamp()));
            obj.insert("_attachments".to_string(), json!("attachments/"));
        }
        document
    }

    fn read_inner(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write_inner(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl DocumentStore for InMemoryStore {
    fn list(&self, max_count: usize) -> StoreResult<Vec<Document>> {
        let inner = self.read_inner()?;
        Ok(inner.docs.values().take(max_count).cloned().collect())
    }

    fn get(&self, id: &str) -> StoreResult<Document> {
        let inner = self.read_inner()?;
        inner
            .docs
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn insert(&self, document: Document) -> StoreResult<Document> {
        let id = Self::doc_id(&document)?;
        let mut inner = self.write_inner()?;
        if inner.docs.contains_key(&id) {
            return Err(StoreError::conflict(&id));
        }
        let stored = Self::stamp(&inner, &id, document);
        inner.docs.insert(id, stored.clone());
        Ok(stored)
    }

    fn upsert(&self, document: Document) -> StoreResult<Document> {
        let id = Self::doc_id(&document)?;
        let mut inner = self.write_inner()?;
        let stored = Self::stamp(&inner, &id, document);
        inner.docs.insert(id, stored.clone());
        Ok(stored)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.write_inner()?;
        inner
            .docs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn ensure_database(&self, name: &str) -> StoreResult<()> {
        let mut inner = self.write_inner()?;
        inner.database = Some(name.to_string());
        Ok(())
    }

    fn ensure_container(&self, name: &str, _partition_key_path: &str) -> StoreResult<()> {
        let mut inner = self.write_inner()?;
        inner.container = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisioned_store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.ensure_database("doktool").unwrap();
        store.ensure_container("prompts", "/id").unwrap();
        store
    }

    #[test]
    fn test_insert_stamps_internal_fields() {
        let store = provisioned_store();
        let stored = store
            .insert(json!({"id": "p1", "text": "hello"}))
            .unwrap();

        assert_eq!(stored["id"], "p1");
        assert_eq!(stored["text"], "hello");
        assert!(stored["_etag"].is_string());
        assert!(stored["_ts"].is_i64());
        assert_eq!(stored["_self"], "dbs/doktool/colls/prompts/docs/p1/");
    }

    #[test]
    fn test_insert_duplicate_id_conflicts() {
        let store = provisioned_store();
        store.insert(json!({"id": "p1"})).unwrap();

        let err = store.insert(json!({"id": "p1"})).unwrap_err();
        assert_eq!(err.status(), 409);
        assert_eq!(err.code(), "Conflict");
    }

    #[test]
    fn test_insert_without_id_is_rejected() {
        let store = provisioned_store();
        let err = store.insert(json!({"text": "no id"})).unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(err.code(), "BadRequest");
    }

    #[test]
    fn test_get_and_delete_missing_id() {
        let store = provisioned_store();
        assert!(matches!(
            store.get("nope").unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            store.delete("nope").unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let store = provisioned_store();
        store.insert(json!({"id": "p1", "text": "old"})).unwrap();
        store.upsert(json!({"id": "p1", "text": "new"})).unwrap();

        let doc = store.get("p1").unwrap();
        assert_eq!(doc["text"], "new");
    }

    #[test]
    fn test_list_respects_max_count() {
        let store = provisioned_store();
        for i in 0..5 {
            store.insert(json!({"id": format!("p{i}")})).unwrap();
        }
        assert_eq!(store.list(3).unwrap().len(), 3);
        assert_eq!(store.list(100).unwrap().len(), 5);
    }
}
