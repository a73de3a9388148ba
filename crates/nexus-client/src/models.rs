//! Wire types for the Nexus search and components endpoints

use serde::{Deserialize, Serialize};

/// A downloadable file attached to a component version (jar, wheel,
/// manifest layer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub content_type: String,
}

/// One component-version-repository row returned by the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub repository: String,
    /// Group ID; only Maven components carry one
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Package format of the owning repository (maven2, pypi, docker)
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// One page from the search/components endpoints. `continuation_token` is
/// present iff more pages exist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
    #[serde(default, rename = "continuationToken")]
    pub continuation_token: Option<String>,
}

/// Filter set for component searches. Only set fields become query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub repository: Option<String>,
    pub format: Option<String>,
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl SearchParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("repository", &self.repository),
            ("format", &self.format),
            ("group", &self.group),
            ("name", &self.name),
            ("version", &self.version),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect()
    }
}
