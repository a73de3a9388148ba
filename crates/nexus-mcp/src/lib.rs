//! MCP Server for Sonatype Nexus Repository Manager
//!
//! This crate exposes Nexus search functionality via the Model Context
//! Protocol, letting agentic IDEs query Maven, PyPI and Docker repositories
//! hosted in a Nexus instance.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ nexus-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ nexus-client (REST client) ]
//!        |
//!        +--> GET {base}/service/rest/v1/search
//!        +--> GET {base}/service/rest/v1/components
//! ```
//!
//! # Tools
//!
//! - `search_maven_artifact` / `get_maven_versions`
//! - `search_python_package` / `get_python_versions`
//! - `list_docker_images` / `get_docker_tags`
//!
//! Every tool accepts connection parameters (`nexus_url`, `nexus_username`,
//! `nexus_password`, optional `nexus_verify_ssl`) alongside its query
//! arguments; server-level defaults can be supplied at startup instead.
//! Tool failures are returned as `{"error": "..."}` payloads — a bad query
//! never terminates the session.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use auth::ConnectionDefaults;
pub use error::{Error, Result};
pub use server::NexusMcpServer;
pub use tools::{get_tool_definitions, ToolContent, ToolDefinition, ToolResult};
