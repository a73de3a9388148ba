//! MCP Tool definitions
//!
//! The six query tools exposed by the server, with their JSON Schemas.
//!
//! # Tool Categories
//!
//! ## Maven
//! - `search_maven_artifact` - Search Maven repositories by group/artifact ID
//! - `get_maven_versions` - Paginated version listing for one artifact
//!
//! ## Python/PyPI
//! - `search_python_package` - Search PyPI repositories, handling the
//!   hyphen/underscore spelling split
//! - `get_python_versions` - Paginated version listing for one package
//!
//! ## Docker
//! - `list_docker_images` - Images and their tags in one repository
//! - `get_docker_tags` - All tags of one image
//!
//! Every schema carries the connection parameters (`nexus_url`,
//! `nexus_username`, `nexus_password`, `nexus_verify_ssl`); they are not
//! listed as required because server-level defaults may stand in.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Connection-parameter properties shared by every tool schema.
fn connection_properties() -> Value {
    json!({
        "nexus_url": {
            "type": "string",
            "description": "Base URL of the Nexus instance (e.g., https://nexus.example.com)"
        },
        "nexus_username": {
            "type": "string",
            "description": "Username for Nexus authentication"
        },
        "nexus_password": {
            "type": "string",
            "description": "Password for Nexus authentication"
        },
        "nexus_verify_ssl": {
            "type": "boolean",
            "description": "Verify SSL certificates (set to false for self-signed certs)"
        }
    })
}

/// Build an object schema from tool-specific properties plus the shared
/// connection parameters.
fn tool_schema(properties: Value, required: &[&str]) -> Value {
    let mut merged = connection_properties();
    if let (Some(target), Some(extra)) = (merged.as_object_mut(), properties.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    json!({
        "type": "object",
        "properties": merged,
        "required": required,
    })
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        // Maven
        ToolDefinition {
            name: "search_maven_artifact".to_string(),
            description: "Search for Maven artifacts by groupId, artifactId or version. \
                          Returns matching artifacts with their versions and download URLs."
                .to_string(),
            input_schema: tool_schema(
                json!({
                    "group_id": {
                        "type": "string",
                        "description": "Maven groupId to search for (e.g., 'org.apache.maven')"
                    },
                    "artifact_id": {
                        "type": "string",
                        "description": "Maven artifactId to search for (e.g., 'maven-core')"
                    },
                    "version": {
                        "type": "string",
                        "description": "Specific version to search for"
                    },
                    "repository": {
                        "type": "string",
                        "description": "Repository name to search in (searches all if not specified)"
                    }
                }),
                &[],
            ),
        },
        ToolDefinition {
            name: "get_maven_versions".to_string(),
            description: "Get versions of a specific Maven artifact with pagination. \
                          Use continuation_token to fetch subsequent pages."
                .to_string(),
            input_schema: tool_schema(
                json!({
                    "group_id": {
                        "type": "string",
                        "description": "Maven groupId (e.g., 'org.apache.maven')"
                    },
                    "artifact_id": {
                        "type": "string",
                        "description": "Maven artifactId (e.g., 'maven-core')"
                    },
                    "repository": {
                        "type": "string",
                        "description": "Repository name to search in (searches all if not specified)"
                    },
                    "page_size": {
                        "type": "integer",
                        "description": "Number of versions per page (default 20)"
                    },
                    "continuation_token": {
                        "type": "string",
                        "description": "Token for next page (from previous response)"
                    }
                }),
                &["group_id", "artifact_id"],
            ),
        },
        // Python/PyPI
        ToolDefinition {
            name: "search_python_package".to_string(),
            description: "Search for Python packages in PyPI-format repositories. \
                          Handles Python package naming conventions (underscores vs hyphens)."
                .to_string(),
            input_schema: tool_schema(
                json!({
                    "name": {
                        "type": "string",
                        "description": "Python package name to search for (e.g., 'requests')"
                    },
                    "repository": {
                        "type": "string",
                        "description": "Repository name to search in (searches all if not specified)"
                    }
                }),
                &["name"],
            ),
        },
        ToolDefinition {
            name: "get_python_versions".to_string(),
            description: "Get versions of a specific Python package with pagination, \
                          including per-version assets (wheel, sdist) and download URLs."
                .to_string(),
            input_schema: tool_schema(
                json!({
                    "package_name": {
                        "type": "string",
                        "description": "Python package name (e.g., 'requests')"
                    },
                    "repository": {
                        "type": "string",
                        "description": "Repository name to search in (searches all if not specified)"
                    },
                    "page_size": {
                        "type": "integer",
                        "description": "Number of versions per page (default 20)"
                    },
                    "continuation_token": {
                        "type": "string",
                        "description": "Token for next page (from previous response)"
                    }
                }),
                &["package_name"],
            ),
        },
        // Docker
        ToolDefinition {
            name: "list_docker_images".to_string(),
            description: "List Docker images in a Nexus repository with their tags.".to_string(),
            input_schema: tool_schema(
                json!({
                    "repository": {
                        "type": "string",
                        "description": "Docker repository name to list images from"
                    }
                }),
                &["repository"],
            ),
        },
        ToolDefinition {
            name: "get_docker_tags".to_string(),
            description: "Get all tags for a specific Docker image, including asset \
                          information when available."
                .to_string(),
            input_schema: tool_schema(
                json!({
                    "repository": {
                        "type": "string",
                        "description": "Docker repository name"
                    },
                    "image_name": {
                        "type": "string",
                        "description": "Docker image name (e.g., 'my-app' or 'library/nginx')"
                    }
                }),
                &["repository", "image_name"],
            ),
        },
    ]
}
