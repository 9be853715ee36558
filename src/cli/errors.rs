//! CLI-specific error types
//!
//! Every CLI error is fatal: main prints it and exits non-zero.

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// The async runtime could not be created
    #[error("failed to create tokio runtime: {0}")]
    Runtime(std::io::Error),

    /// The HTTP server failed to bind or serve
    #[error("HTTP server failed: {0}")]
    Server(std::io::Error),
}
