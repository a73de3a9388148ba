//! Nexus MCP Server
//!
//! A Model Context Protocol server that exposes Sonatype Nexus Repository
//! Manager search tools to agentic IDEs like Claude Desktop, Windsurf, and
//! Cursor.
//!
//! # Usage
//!
//! ```bash
//! nexus-mcp [--url <nexus-url> --username <user> --password <pass>]
//! ```
//!
//! Connection parameters given here become server-wide defaults; explicit
//! `nexus_url` / `nexus_username` / `nexus_password` tool arguments always
//! win. The `NEXUS_URL`, `NEXUS_USERNAME`, `NEXUS_PASSWORD` and
//! `NEXUS_VERIFY_SSL` environment variables are read as well, with CLI
//! flags taking precedence.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `nexus_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use nexus_mcp::{ConnectionDefaults, NexusMcpServer};

/// MCP server for Nexus Repository Manager
#[derive(Parser)]
#[command(name = "nexus-mcp")]
#[command(about = "MCP server for Sonatype Nexus Repository Manager")]
#[command(version)]
struct Args {
    /// Default Nexus base URL (e.g., https://nexus.example.com)
    #[arg(long)]
    url: Option<String>,

    /// Default Nexus username
    #[arg(long)]
    username: Option<String>,

    /// Default Nexus password
    #[arg(long)]
    password: Option<String>,

    /// Skip TLS certificate verification (for self-signed Nexus instances)
    #[arg(long)]
    insecure: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nexus_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut defaults = ConnectionDefaults::from_env();
    if args.url.is_some() {
        defaults.url = args.url;
    }
    if args.username.is_some() {
        defaults.username = args.username;
    }
    if args.password.is_some() {
        defaults.password = args.password;
    }
    if args.insecure {
        defaults.verify_ssl = Some(false);
    }

    tracing::info!("Starting nexus-mcp server");

    let mut server = NexusMcpServer::new(defaults);
    server.run().await?;

    Ok(())
}
