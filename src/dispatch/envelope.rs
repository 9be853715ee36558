//! # Response Envelope
//!
//! The uniform wrapper around every response. Success and failure share
//! one shape; the caller reads `status`, never the transport status code.

use serde::Serialize;
use serde_json::Value;

use crate::config::ConfigEcho;

/// Envelope status field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Error,
}

/// The uniform response wrapper.
///
/// `config` appears only when configuration validation failed; the access
/// key is never part of it.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigEcho>,
}

impl Envelope {
    /// Successful operation with a payload.
    pub fn ok(data: Value) -> Self {
        Self {
            status: Status::Ok,
            message: None,
            data: Some(data),
            config: None,
        }
    }

    /// Operation failure.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
            config: None,
        }
    }

    /// Configuration failure, echoing the partial configuration.
    pub fn config_error(message: impl Into<String>, config: ConfigEcho) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
            config: Some(config),
        }
    }
}
