//! Async HTTP client for the Nexus Repository Manager REST API

use std::time::Duration;

use reqwest::StatusCode;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::models::{SearchParams, SearchResponse, SearchResult};

/// Root path of the Nexus REST API, appended to the instance base URL.
const API_BASE: &str = "/service/rest/v1";

/// Per-request timeout applied to every upstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default safety limit for paginated fetches.
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Async client for the Nexus search/components endpoints.
///
/// Every request carries HTTP Basic Auth from the credentials supplied at
/// construction. Credentials never appear in logs or error messages.
pub struct NexusClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl NexusClient {
    /// Build a client from credentials, validating the URL first.
    pub fn new(credentials: Credentials) -> Result<Self> {
        credentials.validate()?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(!credentials.verify_ssl)
            .build()
            .map_err(|e| Error::ConnectionFailed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            // Trailing slash stripped; a path segment like /nexus is kept.
            base_url: credentials.url.trim_end_matches('/').to_string(),
            username: credentials.username,
            password: credentials.password,
        })
    }

    /// Base URL this client issues requests against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for components matching the given filters.
    ///
    /// Issues a single GET against `/search`; pass the previous page's
    /// `continuation_token` to fetch the next page.
    pub async fn search(
        &self,
        params: &SearchParams,
        continuation_token: Option<&str>,
    ) -> Result<SearchResponse> {
        let mut query = params.to_query();
        if let Some(token) = continuation_token {
            query.push(("continuationToken", token.to_string()));
        }
        self.get_json("/search", &query).await
    }

    /// Search across pages, following continuation tokens until exhausted
    /// or `max_items` collected; the result is truncated to `max_items`.
    ///
    /// Fails fast: any page error aborts the whole fetch with no partial
    /// result.
    pub async fn search_all(
        &self,
        params: &SearchParams,
        max_items: usize,
    ) -> Result<Vec<SearchResult>> {
        let mut all_items = Vec::new();
        let mut token: Option<String> = None;

        while all_items.len() < max_items {
            let page = self.search(params, token.as_deref()).await?;
            all_items.extend(page.items);

            match page.continuation_token {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => break,
            }
        }

        all_items.truncate(max_items);
        Ok(all_items)
    }

    /// List components in a repository (the unfiltered counterpart of
    /// [`search`](Self::search), served by `/components`).
    pub async fn get_components(
        &self,
        repository: &str,
        continuation_token: Option<&str>,
    ) -> Result<SearchResponse> {
        let mut query = vec![("repository", repository.to_string())];
        if let Some(token) = continuation_token {
            query.push(("continuationToken", token.to_string()));
        }
        self.get_json("/components", &query).await
    }

    async fn get_json(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<SearchResponse> {
        let url = format!("{}{}{}", self.base_url, API_BASE, endpoint);
        tracing::debug!(endpoint, filters = query.len(), "Nexus API request");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(query)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(Error::AuthenticationFailed(
                "Authentication failed. Check username and password.".to_string(),
            )),
            StatusCode::FORBIDDEN => Err(Error::AuthenticationFailed(
                "Access denied. Insufficient permissions.".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(Error::NotFound(endpoint.to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Api {
                    status: status.as_u16(),
                    body,
                })
            }
            _ => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| self.map_transport_error(e))?;
                serde_json::from_str(&body).map_err(Error::from)
            }
        }
    }

    fn map_transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::ConnectionFailed(format!("Request timed out: {e}"))
        } else {
            Error::ConnectionFailed(format!(
                "Failed to connect to Nexus at {}: {e}",
                self.base_url
            ))
        }
    }
}
