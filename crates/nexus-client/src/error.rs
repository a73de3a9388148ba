//! Error types for the Nexus API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by Nexus API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials failed validation before any request was issued
    #[error("{0}")]
    InvalidCredentials(String),

    /// Upstream rejected the request (401 or 403)
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Upstream returned 404 for the endpoint
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Connection or timeout failure reaching the upstream
    #[error("{0}")]
    ConnectionFailed(String),

    /// Any other non-2xx response, carrying status and body
    #[error("HTTP error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}
