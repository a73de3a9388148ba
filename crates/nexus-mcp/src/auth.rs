//! Connection-parameter resolution for tool calls
//!
//! Every tool accepts `nexus_url` / `nexus_username` / `nexus_password`
//! (and optionally `nexus_verify_ssl`) as call arguments. Values absent
//! from a call fall back to server-level defaults supplied at startup via
//! CLI flags or `NEXUS_*` environment variables — the stdio-deployment
//! counterpart of header-based credential passing on HTTP transports.

use serde_json::Value;

use nexus_client::Credentials;

use crate::error::{Error, Result};

/// Server-level default connection parameters.
#[derive(Debug, Clone, Default)]
pub struct ConnectionDefaults {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub verify_ssl: Option<bool>,
}

impl ConnectionDefaults {
    /// Read defaults from `NEXUS_URL`, `NEXUS_USERNAME`, `NEXUS_PASSWORD`
    /// and `NEXUS_VERIFY_SSL`.
    pub fn from_env() -> Self {
        Self {
            url: env_non_empty("NEXUS_URL"),
            username: env_non_empty("NEXUS_USERNAME"),
            password: env_non_empty("NEXUS_PASSWORD"),
            verify_ssl: env_non_empty("NEXUS_VERIFY_SSL")
                .map(|value| parse_verify_ssl(&value)),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// `false`, `0` and `no` (any case) disable certificate verification;
/// every other value keeps it on.
pub fn parse_verify_ssl(value: &str) -> bool {
    !matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "no")
}

/// Resolve credentials for one tool call.
///
/// Explicit call arguments take precedence over the server defaults; any
/// parameter still missing yields [`Error::MissingCredentials`] naming
/// every absent value.
pub fn resolve_credentials(
    arguments: &Value,
    defaults: &ConnectionDefaults,
) -> Result<Credentials> {
    let arg = |key: &str| {
        arguments
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let url = arg("nexus_url").or_else(|| defaults.url.clone());
    let username = arg("nexus_username").or_else(|| defaults.username.clone());
    let password = arg("nexus_password").or_else(|| defaults.password.clone());

    let mut missing = Vec::new();
    if url.is_none() {
        missing.push("nexus_url");
    }
    if username.is_none() {
        missing.push("nexus_username");
    }
    if password.is_none() {
        missing.push("nexus_password");
    }

    let (Some(url), Some(username), Some(password)) = (url, username, password) else {
        return Err(Error::MissingCredentials(missing.join(", ")));
    };

    let verify_ssl = match arguments.get("nexus_verify_ssl") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(value)) => parse_verify_ssl(value),
        _ => defaults.verify_ssl.unwrap_or(true),
    };

    let mut credentials = Credentials::new(url, username, password);
    credentials.verify_ssl = verify_ssl;
    Ok(credentials)
}
