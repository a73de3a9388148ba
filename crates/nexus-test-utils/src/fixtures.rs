//! Canned Nexus search-response bodies.

/// Build a single search-result row.
pub fn search_item(
    id: &str,
    repository: &str,
    format: &str,
    group: Option<&str>,
    name: &str,
    version: &str,
    assets: &[(&str, &str, &str)],
) -> String {
    let group = match group {
        Some(g) => format!("\"{g}\""),
        None => "null".to_string(),
    };
    let assets: Vec<String> = assets
        .iter()
        .map(|(download_url, path, content_type)| {
            format!(
                r#"{{"downloadUrl": "{download_url}", "path": "{path}", "contentType": "{content_type}"}}"#
            )
        })
        .collect();
    format!(
        r#"{{"id": "{id}", "repository": "{repository}", "format": "{format}",
            "group": {group}, "name": "{name}", "version": "{version}",
            "assets": [{}]}}"#,
        assets.join(", ")
    )
}

/// Build a search-response page from item bodies.
pub fn search_page(items: &[String], continuation_token: Option<&str>) -> String {
    let token = match continuation_token {
        Some(t) => format!("\"{t}\""),
        None => "null".to_string(),
    };
    format!(
        r#"{{"items": [{}], "continuationToken": {token}}}"#,
        items.join(", ")
    )
}

/// A two-row Maven page: versions 1.0.0 and 1.1.0 of com.example:artifact.
pub fn maven_page() -> String {
    search_page(
        &[
            search_item(
                "bWF2ZW4tcmVsZWFzZXM6MS4wLjA=",
                "maven-releases",
                "maven2",
                Some("com.example"),
                "artifact",
                "1.0.0",
                &[(
                    "https://nexus.example.com/repository/maven-releases/artifact-1.0.0.jar",
                    "com/example/artifact/1.0.0/artifact-1.0.0.jar",
                    "application/java-archive",
                )],
            ),
            search_item(
                "bWF2ZW4tcmVsZWFzZXM6MS4xLjA=",
                "maven-releases",
                "maven2",
                Some("com.example"),
                "artifact",
                "1.1.0",
                &[],
            ),
        ],
        None,
    )
}

/// A one-row PyPI page for the requested package name.
pub fn pypi_page(name: &str, version: &str, id: &str) -> String {
    search_page(
        &[search_item(
            id,
            "pypi-releases",
            "pypi",
            None,
            name,
            version,
            &[(
                "https://nexus.example.com/repository/pypi-releases/pkg.whl",
                "packages/pkg.whl",
                "application/zip",
            )],
        )],
        None,
    )
}

/// An empty result page.
pub fn empty_page() -> String {
    search_page(&[], None)
}
