//! Python/PyPI package query tools
//!
//! The packaging ecosystem treats hyphens and underscores in a package
//! name as the same character, so a package can be indexed under either
//! spelling. Queries fan out over both candidates and merge the results.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::{json, Value};

use nexus_client::{SearchParams, SearchResult, DEFAULT_MAX_ITEMS};

use super::{
    asset_json, attach_continuation, create_client, error_value, format_search_results,
    client_error_message, parse_args,
};
use crate::auth::ConnectionDefaults;

const PYPI_FORMAT: &str = "pypi";

/// The literal name, plus its hyphen/underscore counterpart when distinct.
fn name_candidates(name: &str) -> Vec<String> {
    let normalized = if name.contains('-') {
        name.replace('-', "_")
    } else {
        name.replace('_', "-")
    };

    let mut candidates = vec![name.to_string()];
    if normalized != name {
        candidates.push(normalized);
    }
    candidates
}

/// Merge additional rows into `results`, skipping ids already present.
fn merge_by_id(results: &mut Vec<SearchResult>, additional: Vec<SearchResult>) {
    let seen: HashSet<String> = results.iter().map(|r| r.id.clone()).collect();
    results.extend(additional.into_iter().filter(|r| !seen.contains(&r.id)));
}

fn pypi_params(repository: Option<String>, name: String) -> SearchParams {
    SearchParams {
        repository,
        format: Some(PYPI_FORMAT.to_string()),
        name: Some(name),
        ..Default::default()
    }
}

#[derive(Debug, Deserialize)]
struct SearchPythonArgs {
    name: String,
    #[serde(default)]
    repository: Option<String>,
}

/// Search PyPI-format repositories for packages matching the given name.
pub(super) async fn search_python_package(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: SearchPythonArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    let mut results: Vec<SearchResult> = Vec::new();
    for candidate in name_candidates(&args.name) {
        let params = pypi_params(args.repository.clone(), candidate);
        match client.search_all(&params, DEFAULT_MAX_ITEMS).await {
            Ok(batch) => merge_by_id(&mut results, batch),
            Err(error) => return error_value(client_error_message(&error)),
        }
    }

    json!({
        "count": results.len(),
        "packages": format_search_results(&results),
    })
}

#[derive(Debug, Deserialize)]
struct PythonVersionsArgs {
    package_name: String,
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

/// Get versions of a specific Python package, one upstream page at a time.
pub(super) async fn get_python_versions(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: PythonVersionsArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    tracing::debug!(
        package_name = %args.package_name,
        page_size = args.page_size,
        "Listing Python package versions"
    );

    let params = pypi_params(args.repository.clone(), args.package_name.clone());
    let mut response = match client
        .search(&params, args.continuation_token.as_deref())
        .await
    {
        Ok(response) => response,
        Err(error) => return error_value(client_error_message(&error)),
    };

    // The alternate spelling is looked up on the first page only; repeating
    // it under a continuation token would duplicate the fan-out per page.
    if args.continuation_token.is_none() {
        for candidate in name_candidates(&args.package_name).into_iter().skip(1) {
            let params = pypi_params(args.repository.clone(), candidate);
            match client.search(&params, None).await {
                Ok(additional) => merge_by_id(&mut response.items, additional.items),
                Err(error) => return error_value(client_error_message(&error)),
            }
        }
    }

    let versions = group_versions(&response.items);
    let mut result = json!({
        "packageName": args.package_name,
        "count": versions.len(),
        "versions": versions,
    });
    attach_continuation(&mut result, response.continuation_token);
    result
}

/// Group rows by version, accumulating asset lists — a wheel and an sdist
/// of the same release are two rows mapping to one version. Repository is
/// first-seen; order is descending by plain string comparison.
fn group_versions(items: &[SearchResult]) -> Vec<Value> {
    let mut entries: Vec<(String, String, Vec<Value>)> = Vec::new();
    for item in items {
        let assets = item.assets.iter().map(asset_json);
        match entries.iter_mut().find(|(version, _, _)| *version == item.version) {
            Some((_, _, existing)) => existing.extend(assets),
            None => entries.push((
                item.version.clone(),
                item.repository.clone(),
                assets.collect(),
            )),
        }
    }
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries
        .into_iter()
        .map(|(version, repository, assets)| {
            json!({
                "version": version,
                "repository": repository,
                "assets": assets,
            })
        })
        .collect()
}
