//! Integration tests for the MCP tools, driven end-to-end against an
//! in-process mock Nexus listener.

use nexus_mcp::handlers::handle_tool_call;
use nexus_mcp::ConnectionDefaults;
use serde_json::{json, Value};

use nexus_test_utils::fixtures::{empty_page, maven_page, pypi_page, search_item, search_page};
use nexus_test_utils::{spawn_server, MockNexus};

fn args_for(mock: &MockNexus, extra: Value) -> Value {
    let mut arguments = json!({
        "nexus_url": mock.base_url,
        "nexus_username": "testuser",
        "nexus_password": "testpass",
    });
    if let (Some(target), Some(source)) = (arguments.as_object_mut(), extra.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    arguments
}

async fn call(mock: &MockNexus, tool: &str, extra: Value) -> Value {
    handle_tool_call(&ConnectionDefaults::default(), tool, args_for(mock, extra))
        .await
        .unwrap()
}

// ==========================================================================
// Maven
// ==========================================================================

#[tokio::test]
async fn search_maven_artifact_returns_artifacts() {
    let mut mock = spawn_server(vec![(200, maven_page())]).await;

    let result = call(
        &mock,
        "search_maven_artifact",
        json!({ "group_id": "com.example", "artifact_id": "artifact" }),
    )
    .await;

    assert!(result.get("error").is_none());
    assert_eq!(result["count"], 2);
    assert_eq!(result["artifacts"].as_array().unwrap().len(), 2);
    assert_eq!(result["artifacts"][0]["group"], "com.example");

    let target = mock.next_target().await;
    assert!(target.contains("format=maven2"));
    assert!(target.contains("group=com.example"));
}

#[tokio::test]
async fn search_maven_artifact_without_ids_makes_no_http_call() {
    let mut mock = spawn_server(vec![(200, maven_page())]).await;

    let result = call(&mock, "search_maven_artifact", json!({})).await;

    assert!(
        result["error"]
            .as_str()
            .unwrap()
            .contains("group_id or artifact_id")
    );
    assert!(mock.recorded_targets().is_empty());
}

#[tokio::test]
async fn search_maven_artifact_maps_auth_failure() {
    let mock = spawn_server(vec![(401, r#"{"message": "Unauthorized"}"#.to_string())]).await;

    let result = call(
        &mock,
        "search_maven_artifact",
        json!({ "group_id": "com.example" }),
    )
    .await;

    let message = result["error"].as_str().unwrap();
    assert!(message.starts_with("Authentication error:"));
}

#[tokio::test]
async fn get_maven_versions_sorts_descending() {
    let mock = spawn_server(vec![(200, maven_page())]).await;

    let result = call(
        &mock,
        "get_maven_versions",
        json!({ "group_id": "com.example", "artifact_id": "artifact" }),
    )
    .await;

    assert_eq!(result["groupId"], "com.example");
    assert_eq!(result["artifactId"], "artifact");
    assert_eq!(result["count"], 2);
    assert_eq!(result["versions"][0]["version"], "1.1.0");
    assert_eq!(result["versions"][1]["version"], "1.0.0");
    assert_eq!(result["hasMore"], false);
    assert!(result.get("continuationToken").is_none());
}

#[tokio::test]
async fn get_maven_versions_reports_continuation_token() {
    let item = search_item(
        "id-1",
        "maven-releases",
        "maven2",
        Some("com.example"),
        "artifact",
        "1.0.0",
        &[],
    );
    let mock = spawn_server(vec![(200, search_page(&[item], Some("next-token")))]).await;

    let result = call(
        &mock,
        "get_maven_versions",
        json!({ "group_id": "com.example", "artifact_id": "artifact" }),
    )
    .await;

    assert_eq!(result["hasMore"], true);
    assert_eq!(result["continuationToken"], "next-token");
}

// ==========================================================================
// Python/PyPI
// ==========================================================================

#[tokio::test]
async fn search_python_package_fans_out_to_normalized_name() {
    let mut mock = spawn_server(vec![
        (200, pypi_page("my-package", "1.0.0", "id-hyphen")),
        (200, pypi_page("my_package", "1.0.0", "id-underscore")),
    ])
    .await;

    let result = call(&mock, "search_python_package", json!({ "name": "my-package" })).await;

    assert_eq!(result["count"], 2);

    let first = mock.next_target().await;
    assert!(first.contains("name=my-package"));
    let second = mock.next_target().await;
    assert!(second.contains("name=my_package"));
}

#[tokio::test]
async fn search_python_package_dedups_by_id() {
    // Both spellings resolve to the same indexed component.
    let mut mock = spawn_server(vec![
        (200, pypi_page("my-package", "1.0.0", "same-id")),
        (200, pypi_page("my-package", "1.0.0", "same-id")),
    ])
    .await;

    let result = call(&mock, "search_python_package", json!({ "name": "my-package" })).await;

    assert_eq!(result["count"], 1);
    assert_eq!(mock.recorded_targets().len(), 2);
}

#[tokio::test]
async fn search_python_package_plain_name_queries_once() {
    let mut mock = spawn_server(vec![(200, pypi_page("requests", "2.28.0", "id-1"))]).await;

    let result = call(&mock, "search_python_package", json!({ "name": "requests" })).await;

    assert_eq!(result["count"], 1);
    assert_eq!(result["packages"][0]["name"], "requests");
    assert_eq!(mock.recorded_targets().len(), 1);
}

#[tokio::test]
async fn get_python_versions_fans_out_on_first_page_only() {
    let mut mock = spawn_server(vec![
        (200, pypi_page("my-package", "1.0.0", "id-1")),
        (200, empty_page()),
    ])
    .await;

    call(&mock, "get_python_versions", json!({ "package_name": "my-package" })).await;
    assert_eq!(mock.recorded_targets().len(), 2);

    // With a continuation token the alternate spelling is not re-queried.
    let mut mock = spawn_server(vec![(200, pypi_page("my-package", "1.1.0", "id-2"))]).await;

    call(
        &mock,
        "get_python_versions",
        json!({ "package_name": "my-package", "continuation_token": "page-2" }),
    )
    .await;
    let targets = mock.recorded_targets();
    assert_eq!(targets.len(), 1);
    assert!(targets[0].contains("continuationToken=page-2"));
}

#[tokio::test]
async fn get_python_versions_accumulates_assets_per_version() {
    let wheel = search_item(
        "id-wheel",
        "pypi-releases",
        "pypi",
        None,
        "requests",
        "2.28.0",
        &[(
            "https://nexus.example.com/requests-2.28.0-py3-none-any.whl",
            "packages/requests-2.28.0-py3-none-any.whl",
            "application/zip",
        )],
    );
    let sdist = search_item(
        "id-sdist",
        "pypi-releases",
        "pypi",
        None,
        "requests",
        "2.28.0",
        &[(
            "https://nexus.example.com/requests-2.28.0.tar.gz",
            "packages/requests-2.28.0.tar.gz",
            "application/x-gzip",
        )],
    );
    let mock = spawn_server(vec![(200, search_page(&[wheel, sdist], None))]).await;

    let result = call(&mock, "get_python_versions", json!({ "package_name": "requests" })).await;

    assert_eq!(result["packageName"], "requests");
    assert_eq!(result["count"], 1);
    let assets = result["versions"][0]["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(result["hasMore"], false);
}

// ==========================================================================
// Docker
// ==========================================================================

fn docker_item(id: &str, name: &str, version: &str) -> String {
    search_item(id, "docker-hosted", "docker", None, name, version, &[])
}

#[tokio::test]
async fn list_docker_images_groups_tags_per_image() {
    let page = search_page(
        &[
            docker_item("id-1", "my-app", "latest"),
            docker_item("id-2", "my-app", "v1"),
            docker_item("id-3", "other-app", "2.0"),
        ],
        None,
    );
    let mut mock = spawn_server(vec![(200, page)]).await;

    let result = call(&mock, "list_docker_images", json!({ "repository": "docker-hosted" })).await;

    assert_eq!(result["repository"], "docker-hosted");
    assert_eq!(result["count"], 2);
    assert_eq!(result["images"][0]["name"], "my-app");
    assert_eq!(result["images"][0]["tags"], json!(["v1", "latest"]));
    assert_eq!(result["images"][1]["tags"], json!(["2.0"]));

    let target = mock.next_target().await;
    assert!(target.contains("repository=docker-hosted"));
    assert!(target.contains("format=docker"));
}

#[tokio::test]
async fn get_docker_tags_sorts_descending() {
    let page = search_page(
        &[
            docker_item("id-1", "my-app", "1.0"),
            docker_item("id-2", "my-app", "2.0"),
        ],
        None,
    );
    let mock = spawn_server(vec![(200, page)]).await;

    let result = call(
        &mock,
        "get_docker_tags",
        json!({ "repository": "docker-hosted", "image_name": "my-app" }),
    )
    .await;

    assert_eq!(result["imageName"], "my-app");
    assert_eq!(result["count"], 2);
    assert_eq!(result["tags"][0]["tag"], "2.0");
    assert_eq!(result["tags"][1]["tag"], "1.0");
}

// ==========================================================================
// Cross-cutting failure modes
// ==========================================================================

#[tokio::test]
async fn every_search_tool_reports_auth_errors() {
    let tools: &[(&str, Value)] = &[
        ("search_maven_artifact", json!({ "group_id": "com.example" })),
        (
            "get_maven_versions",
            json!({ "group_id": "com.example", "artifact_id": "artifact" }),
        ),
        ("search_python_package", json!({ "name": "requests" })),
        ("get_python_versions", json!({ "package_name": "requests" })),
        ("list_docker_images", json!({ "repository": "docker-hosted" })),
        (
            "get_docker_tags",
            json!({ "repository": "docker-hosted", "image_name": "my-app" }),
        ),
    ];

    for (tool, extra) in tools {
        let mock = spawn_server(vec![(401, r#"{"message": "Unauthorized"}"#.to_string())]).await;
        let result = call(&mock, tool, extra.clone()).await;
        let message = result["error"].as_str().unwrap();
        assert!(
            message.starts_with("Authentication error:"),
            "tool {tool} reported: {message}"
        );
    }
}

#[tokio::test]
async fn connection_failures_surface_as_connection_errors() {
    // A port with nothing listening behind it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = handle_tool_call(
        &ConnectionDefaults::default(),
        "list_docker_images",
        json!({
            "nexus_url": format!("http://{addr}"),
            "nexus_username": "testuser",
            "nexus_password": "testpass",
            "repository": "docker-hosted",
        }),
    )
    .await
    .unwrap();

    let message = result["error"].as_str().unwrap();
    assert!(message.starts_with("Connection error:"));
}
