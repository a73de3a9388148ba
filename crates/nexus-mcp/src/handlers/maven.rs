//! Maven artifact query tools

use serde::Deserialize;
use serde_json::{json, Value};

use nexus_client::{SearchParams, SearchResult, DEFAULT_MAX_ITEMS};

use super::{
    attach_continuation, create_client, error_value, format_search_results,
    client_error_message, parse_args,
};
use crate::auth::ConnectionDefaults;

const MAVEN_FORMAT: &str = "maven2";

#[derive(Debug, Deserialize)]
struct SearchMavenArgs {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    repository: Option<String>,
}

/// Search Maven repositories by groupId, artifactId or version.
pub(super) async fn search_maven_artifact(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: SearchMavenArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    // Precondition checked before any client work: an unconstrained Maven
    // search would sweep every repository.
    if args.group_id.is_none() && args.artifact_id.is_none() {
        return error_value("At least one of group_id or artifact_id must be provided");
    }

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    let params = SearchParams {
        repository: args.repository,
        format: Some(MAVEN_FORMAT.to_string()),
        group: args.group_id,
        name: args.artifact_id,
        version: args.version,
    };

    match client.search_all(&params, DEFAULT_MAX_ITEMS).await {
        Ok(results) => json!({
            "count": results.len(),
            "artifacts": format_search_results(&results),
        }),
        Err(error) => error_value(client_error_message(&error)),
    }
}

#[derive(Debug, Deserialize)]
struct MavenVersionsArgs {
    group_id: String,
    artifact_id: String,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default = "default_page_size")]
    page_size: u32,
    #[serde(default)]
    continuation_token: Option<String>,
}

fn default_page_size() -> u32 {
    20
}

/// Get versions of a specific Maven artifact, one upstream page at a time.
pub(super) async fn get_maven_versions(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: MavenVersionsArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    // page_size is part of the tool interface but not forwarded upstream;
    // Nexus decides how many rows each page carries.
    tracing::debug!(
        group_id = %args.group_id,
        artifact_id = %args.artifact_id,
        page_size = args.page_size,
        "Listing Maven versions"
    );

    let params = SearchParams {
        repository: args.repository,
        format: Some(MAVEN_FORMAT.to_string()),
        group: Some(args.group_id.clone()),
        name: Some(args.artifact_id.clone()),
        version: None,
    };

    let response = match client
        .search(&params, args.continuation_token.as_deref())
        .await
    {
        Ok(response) => response,
        Err(error) => return error_value(client_error_message(&error)),
    };

    let versions = dedup_versions(&response.items);
    let mut result = json!({
        "groupId": args.group_id,
        "artifactId": args.artifact_id,
        "count": versions.len(),
        "versions": versions,
    });
    attach_continuation(&mut result, response.continuation_token);
    result
}

/// Deduplicate rows by version string, keeping the first-seen repository
/// and assets per version, sorted descending by plain string comparison.
/// The sort is intentionally not semver-aware; it mirrors the upstream
/// listing order.
fn dedup_versions(items: &[SearchResult]) -> Vec<Value> {
    let mut entries: Vec<(String, Value)> = Vec::new();
    for item in items {
        if entries.iter().any(|(version, _)| *version == item.version) {
            continue;
        }
        entries.push((
            item.version.clone(),
            json!({
                "version": item.version,
                "repository": item.repository,
                "assets": item.assets.iter().map(|a| json!({
                    "downloadUrl": a.download_url,
                    "path": a.path,
                })).collect::<Vec<_>>(),
            }),
        ));
    }
    entries.sort_by(|(a, _), (b, _)| b.cmp(a));
    entries.into_iter().map(|(_, entry)| entry).collect()
}
