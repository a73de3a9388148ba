//! Connection credentials for a Nexus instance

use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Credentials for connecting to a Nexus Repository Manager instance.
///
/// The password is redacted from the `Debug` representation so credentials
/// can never leak through log output or error context.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// Base URL of the Nexus instance, e.g. `https://nexus.example.com`
    pub url: String,
    /// Username for HTTP Basic Auth
    pub username: String,
    /// Password for HTTP Basic Auth
    pub password: String,
    /// Verify TLS certificates (disable for self-signed certs)
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

fn default_verify_ssl() -> bool {
    true
}

impl Credentials {
    /// Create credentials with TLS verification enabled.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            verify_ssl: true,
        }
    }

    /// Validate the base URL: it must parse, use an http(s) scheme and
    /// name a host.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.url)
            .map_err(|_| Error::InvalidCredentials(format!("Invalid Nexus URL: {}", self.url)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidCredentials(format!(
                    "URL scheme must be http or https, got: {other}"
                )));
            }
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(Error::InvalidCredentials(format!(
                "Invalid Nexus URL: {}",
                self.url
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("verify_ssl", &self.verify_ssl)
            .finish()
    }
}
