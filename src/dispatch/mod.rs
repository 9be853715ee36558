//! # Request Dispatcher
//!
//! Maps one inbound request (method + optional id + optional body) onto
//! one gateway operation: validate configuration, provision the
//! database/container handle, dispatch by method, wrap the result in the
//! uniform envelope. Holds no per-request state; the store handle is
//! long-lived and shared.

pub mod envelope;
pub mod errors;

pub use envelope::{Envelope, Status};
pub use errors::{DispatchError, DispatchResult};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::http::Method;
use serde_json::{json, Value};

use crate::config::{ResolvedConfig, StoreConfig};
use crate::gateway::{Gateway, DEFAULT_LIST_LIMIT};
use crate::store::DocumentStore;

/// Partition key path: documents are partitioned by their id.
const PARTITION_KEY_PATH: &str = "/id";

/// Request dispatcher over a shared store handle.
pub struct Dispatcher<S: DocumentStore> {
    config: StoreConfig,
    store: Arc<S>,
    provisioned: AtomicBool,
}

impl<S: DocumentStore> Dispatcher<S> {
    pub fn new(config: StoreConfig, store: Arc<S>) -> Self {
        Self {
            config,
            store,
            provisioned: AtomicBool::new(false),
        }
    }

    /// Handle one request end to end. Never fails: every outcome,
    /// success or failure, becomes an envelope.
    pub fn handle(&self, method: &Method, id: Option<&str>, body: Option<Value>) -> Envelope {
        let resolved = match self.config.validate() {
            Ok(resolved) => resolved,
            Err(field) => {
                let err = DispatchError::ConfigMissing(field);
                return Envelope::config_error(err.to_string(), self.config.echo());
            }
        };

        if let Err(err) = self.provision(&resolved) {
            return Envelope::error(DispatchError::StoreUnavailable(err.to_string()).to_string());
        }

        match self.dispatch(method, id, body) {
            Ok(data) => Envelope::ok(data),
            Err(err) => Envelope::error(err.to_string()),
        }
    }

    /// Resolve (create-if-absent) the database and container.
    ///
    /// Memoized after the first success; ensure calls are idempotent, so
    /// a racing double-provision is harmless.
    fn provision(&self, config: &ResolvedConfig<'_>) -> crate::store::StoreResult<()> {
        if self.provisioned.load(Ordering::Acquire) {
            return Ok(());
        }
        self.store.ensure_database(config.database)?;
        self.store
            .ensure_container(config.container, PARTITION_KEY_PATH)?;
        self.provisioned.store(true, Ordering::Release);
        Ok(())
    }

    /// Method → gateway operation table.
    fn dispatch(
        &self,
        method: &Method,
        id: Option<&str>,
        body: Option<Value>,
    ) -> DispatchResult<Value> {
        let gateway = Gateway::new(self.store.as_ref());

        let data = match method.as_str() {
            "GET" => match id {
                None => serde_json::to_value(gateway.list_items(DEFAULT_LIST_LIMIT)?)?,
                Some(id) => gateway.read_item(id)?,
            },
            "POST" => {
                let body = body.ok_or(DispatchError::MissingBody("POST"))?;
                gateway.create_item(body)?
            }
            "PUT" => {
                let id = id.ok_or(DispatchError::MissingId("PUT"))?;
                let changes = body.ok_or(DispatchError::MissingBody("PUT"))?;
                serde_json::to_value(gateway.update_item(id, changes)?)?
            }
            "DELETE" => {
                let id = id.ok_or(DispatchError::MissingId("DELETE"))?;
                serde_json::to_value(gateway.delete_item(id)?)?
            }
            // Reserved for ids-only and capabilities responses.
            "HEAD" | "OPTIONS" => json!({}),
            _ => return Err(DispatchError::MethodNotAllowed(method.to_string())),
        };

        Ok(data)
    }
}
