//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! Nexus query tools.

use std::io::{BufRead, Write};

use serde_json::{json, Value};

use crate::auth::ConnectionDefaults;
use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::tools::{get_tool_definitions, ToolDefinition, ToolResult};
use crate::{Error, Result};

/// MCP Server for Nexus Repository Manager
///
/// Speaks JSON-RPC 2.0 over stdio and exposes the Maven, PyPI and Docker
/// query tools. Each tool invocation is independent: credentials are
/// re-resolved and a fresh API client is built per call, so no state is
/// shared between invocations.
///
/// # Example
///
/// ```ignore
/// use nexus_mcp::{ConnectionDefaults, NexusMcpServer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = NexusMcpServer::new(ConnectionDefaults::from_env());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct NexusMcpServer {
    /// Fallback connection parameters for calls without explicit ones
    defaults: ConnectionDefaults,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools
    tools: Vec<ToolDefinition>,
}

impl NexusMcpServer {
    /// Create a new MCP server instance
    pub fn new(defaults: ConnectionDefaults) -> Self {
        Self {
            defaults,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Initialize the server, loading the tool definitions.
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!("Initializing MCP server");
        self.tools = get_tool_definitions();
        self.initialized = true;
        Ok(())
    }

    /// Run the MCP server
    ///
    /// Starts processing MCP protocol messages over stdin/stdout.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize()?;

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate
    /// handler. Returns the response as a string, or an empty string for
    /// notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" => return Ok(String::new()), // Notification, no response
            "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request, returning capabilities and info.
    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "nexus-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list, returning the available tool definitions.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools_value: Vec<Value> = get_tool_definitions()
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools_value }))
    }

    /// Handle tools/call, executing the requested tool.
    ///
    /// Query failures come back inside the tool payload as `{"error": ...}`
    /// values; only dispatch-level failures (unknown tool, malformed call
    /// params) become `is_error` results.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(&self.defaults, &tool_params.name, tool_params.arguments).await {
            Ok(result) => {
                let tool_result = ToolResult::text(serde_json::to_string_pretty(&result)?);
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
            Err(e) => {
                let tool_result = ToolResult::error(format!("{}", e));
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
        }
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
