//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the Nexus API client
    #[error("{0}")]
    Client(#[from] nexus_client::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection parameters absent from both the call and the defaults
    #[error("Missing required Nexus credentials: {0}")]
    MissingCredentials(String),

    /// Caller violated a tool precondition
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
