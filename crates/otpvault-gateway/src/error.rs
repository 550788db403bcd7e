//! Gateway error types.

use thiserror::Error;

/// Errors that can occur while serving the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// I/O error (bind failure, connection error).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
