//! # Dispatch Errors
//!
//! Everything that can stop a request before or during a gateway
//! operation. Every variant ends up as an `ERROR` envelope; nothing
//! escapes the dispatcher un-enveloped.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Request-level failures
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required configuration value is absent
    #[error("missing configuration value '{0}'")]
    ConfigMissing(&'static str),

    /// The database/container handle could not be opened
    #[error("could not connect to database: {0}")]
    StoreUnavailable(String),

    /// The method needs an `id` query parameter and none was given
    #[error("{0} requires an 'id' query parameter")]
    MissingId(&'static str),

    /// The method needs a JSON request body and none was given
    #[error("{0} requires a JSON request body")]
    MissingBody(&'static str),

    /// The HTTP method maps to no operation
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// A gateway operation failed against the store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An operation result could not be serialized
    #[error("response serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
