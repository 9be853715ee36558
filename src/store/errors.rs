//! # Store Errors
//!
//! Error taxonomy for the document store collaborator.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a document store
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No document exists for the requested id
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// The store rejected a request (conflict, malformed document, ...)
    #[error("{message}")]
    Request {
        status: u16,
        code: String,
        message: String,
    },

    /// The store could not be reached or a handle could not be opened
    #[error("{0}")]
    Unavailable(String),
}

impl StoreError {
    /// Duplicate-id insert rejection, in the store's native multi-line shape.
    pub fn conflict(id: &str) -> Self {
        StoreError::Request {
            status: 409,
            code: "Conflict".to_string(),
            message: format!(
                "Entity with the specified id already exists in the system.\nRequested id: {id}"
            ),
        }
    }

    /// Malformed-document rejection.
    pub fn bad_request(message: impl Into<String>) -> Self {
        StoreError::Request {
            status: 400,
            code: "BadRequest".to_string(),
            message: message.into(),
        }
    }

    /// Numeric status code the store associates with this error.
    pub fn status(&self) -> u16 {
        match self {
            StoreError::NotFound { .. } => 404,
            StoreError::Request { status, .. } => *status,
            StoreError::Unavailable(_) => 503,
        }
    }

    /// Symbolic reason code the store associates with this error.
    pub fn code(&self) -> &str {
        match self {
            StoreError::NotFound { .. } => "NotFound",
            StoreError::Request { code, .. } => code,
            StoreError::Unavailable(_) => "ServiceUnavailable",
        }
    }
}
