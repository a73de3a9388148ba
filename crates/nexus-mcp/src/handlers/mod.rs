//! MCP Tool Handlers
//!
//! Dispatch plus the per-format query and aggregation logic. Handlers
//! uphold the boundary contract: every failure comes back as an
//! `{"error": "..."}` value, never as an `Err` — one bad query must not
//! kill the session. Only an unknown tool name is a hard error, which the
//! server reports as an `is_error` tool result.

mod docker;
mod maven;
mod python;

use serde_json::{json, Value};

use nexus_client::{Asset, Error as ClientError, NexusClient, SearchResult};

use crate::auth::{self, ConnectionDefaults};
use crate::error::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    defaults: &ConnectionDefaults,
    tool_name: &str,
    arguments: Value,
) -> Result<Value> {
    match tool_name {
        // Maven
        "search_maven_artifact" => Ok(maven::search_maven_artifact(defaults, arguments).await),
        "get_maven_versions" => Ok(maven::get_maven_versions(defaults, arguments).await),

        // Python/PyPI
        "search_python_package" => Ok(python::search_python_package(defaults, arguments).await),
        "get_python_versions" => Ok(python::get_python_versions(defaults, arguments).await),

        // Docker
        "list_docker_images" => Ok(docker::list_docker_images(defaults, arguments).await),
        "get_docker_tags" => Ok(docker::get_docker_tags(defaults, arguments).await),

        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Shape an error message as the boundary `{"error": ...}` value.
fn error_value(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

/// Map a client error to its user-facing message.
fn client_error_message(error: &ClientError) -> String {
    match error {
        ClientError::AuthenticationFailed(_) => format!("Authentication error: {error}"),
        ClientError::ConnectionFailed(_) => format!("Connection error: {error}"),
        ClientError::NotFound(_) => format!("Not found: {error}"),
        ClientError::InvalidCredentials(_) => format!("Invalid parameters: {error}"),
        _ => format!("Nexus error: {error}"),
    }
}

/// Build a client for one invocation. Resolution or validation failures
/// come back as ready-to-return `{"error": ...}` values.
fn create_client(
    defaults: &ConnectionDefaults,
    arguments: &Value,
) -> std::result::Result<NexusClient, Value> {
    let credentials = auth::resolve_credentials(arguments, defaults)
        .map_err(|e| error_value(e.to_string()))?;
    NexusClient::new(credentials).map_err(|e| error_value(client_error_message(&e)))
}

/// Parse handler arguments, shaping serde failures as parameter errors.
fn parse_args<T: serde::de::DeserializeOwned>(
    arguments: &Value,
) -> std::result::Result<T, Value> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| error_value(Error::InvalidParameters(e.to_string()).to_string()))
}

fn asset_json(asset: &Asset) -> Value {
    json!({
        "downloadUrl": asset.download_url,
        "path": asset.path,
        "contentType": asset.content_type,
    })
}

/// Format search rows for tool output.
fn format_search_results(results: &[SearchResult]) -> Value {
    let rows: Vec<Value> = results
        .iter()
        .map(|r| {
            json!({
                "repository": r.repository,
                "group": r.group,
                "name": r.name,
                "version": r.version,
                "format": r.format,
                "assets": r.assets.iter().map(|a| json!({
                    "downloadUrl": a.download_url,
                    "path": a.path,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();
    Value::Array(rows)
}

/// Attach pagination metadata to a result object. An empty token counts
/// as no token.
fn attach_continuation(result: &mut Value, token: Option<String>) {
    let Some(object) = result.as_object_mut() else {
        return;
    };
    match token.filter(|t| !t.is_empty()) {
        Some(token) => {
            object.insert("continuationToken".to_string(), Value::String(token));
            object.insert("hasMore".to_string(), Value::Bool(true));
        }
        None => {
            object.insert("hasMore".to_string(), Value::Bool(false));
        }
    }
}
