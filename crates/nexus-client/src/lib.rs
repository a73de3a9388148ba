//! Client for the Sonatype Nexus Repository Manager REST API
//!
//! This crate wraps the `/service/rest/v1` search and components endpoints
//! with an async client. It handles HTTP Basic Auth, query-parameter
//! assembly, token-based pagination and the mapping from HTTP failures to a
//! small error taxonomy. It knows nothing about package formats beyond the
//! `format` filter string; format-specific aggregation lives in the callers.
//!
//! # Example
//!
//! ```no_run
//! use nexus_client::{Credentials, NexusClient, SearchParams};
//!
//! # async fn example() -> nexus_client::Result<()> {
//! let credentials = Credentials::new("https://nexus.example.com", "user", "pass");
//! let client = NexusClient::new(credentials)?;
//!
//! let params = SearchParams {
//!     format: Some("maven2".to_string()),
//!     group: Some("org.apache.maven".to_string()),
//!     ..Default::default()
//! };
//! let results = client.search_all(&params, 1000).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod models;

pub use client::{NexusClient, DEFAULT_MAX_ITEMS};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use models::{Asset, SearchParams, SearchResponse, SearchResult};
