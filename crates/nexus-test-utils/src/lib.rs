//! Shared test utilities for the nexus-mcp workspace.
//!
//! This crate provides a minimal in-process HTTP listener standing in for a
//! Nexus instance, plus canned search-response fixtures. It is a
//! dev-dependency only — never published.

pub mod fixtures;
pub mod server;

pub use server::{spawn_server, MockNexus};
