//! Docker image query tools

use serde::Deserialize;
use serde_json::{json, Value};

use nexus_client::{SearchParams, SearchResult, DEFAULT_MAX_ITEMS};

use super::{
    asset_json, create_client, error_value, client_error_message, parse_args,
};
use crate::auth::ConnectionDefaults;

const DOCKER_FORMAT: &str = "docker";

#[derive(Debug, Deserialize)]
struct ListImagesArgs {
    repository: String,
}

/// List Docker images in a repository with their tags.
pub(super) async fn list_docker_images(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: ListImagesArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    let params = SearchParams {
        repository: Some(args.repository.clone()),
        format: Some(DOCKER_FORMAT.to_string()),
        ..Default::default()
    };

    match client.search_all(&params, DEFAULT_MAX_ITEMS).await {
        Ok(results) => {
            let images = group_images(&results);
            json!({
                "repository": args.repository,
                "count": images.len(),
                "images": images,
            })
        }
        Err(error) => error_value(client_error_message(&error)),
    }
}

#[derive(Debug, Deserialize)]
struct DockerTagsArgs {
    repository: String,
    image_name: String,
}

/// Get all tags for a specific Docker image.
pub(super) async fn get_docker_tags(
    defaults: &ConnectionDefaults,
    arguments: Value,
) -> Value {
    let args: DockerTagsArgs = match parse_args(&arguments) {
        Ok(args) => args,
        Err(error) => return error,
    };

    let client = match create_client(defaults, &arguments) {
        Ok(client) => client,
        Err(error) => return error,
    };

    let params = SearchParams {
        repository: Some(args.repository.clone()),
        format: Some(DOCKER_FORMAT.to_string()),
        name: Some(args.image_name.clone()),
        ..Default::default()
    };

    match client.search_all(&params, DEFAULT_MAX_ITEMS).await {
        Ok(results) => {
            let tags = tag_entries(&results);
            json!({
                "repository": args.repository,
                "imageName": args.image_name,
                "count": tags.len(),
                "tags": tags,
            })
        }
        Err(error) => error_value(client_error_message(&error)),
    }
}

/// Group rows by image name, collecting distinct version strings as tags.
/// Image order follows first appearance; each tag list is sorted
/// descending by plain string comparison.
fn group_images(items: &[SearchResult]) -> Vec<Value> {
    let mut images: Vec<(String, String, Vec<String>)> = Vec::new();
    for item in items {
        match images.iter_mut().find(|(name, _, _)| *name == item.name) {
            Some((_, _, tags)) => {
                if !item.version.is_empty() && !tags.contains(&item.version) {
                    tags.push(item.version.clone());
                }
            }
            None => {
                let mut tags = Vec::new();
                if !item.version.is_empty() {
                    tags.push(item.version.clone());
                }
                images.push((item.name.clone(), item.repository.clone(), tags));
            }
        }
    }

    images
        .into_iter()
        .map(|(name, repository, mut tags)| {
            tags.sort_by(|a, b| b.cmp(a));
            json!({
                "name": name,
                "repository": repository,
                "tags": tags,
            })
        })
        .collect()
}

/// One entry per row (tag), sorted descending by tag string.
fn tag_entries(items: &[SearchResult]) -> Vec<Value> {
    let mut sorted: Vec<&SearchResult> = items.iter().collect();
    sorted.sort_by(|a, b| b.version.cmp(&a.version));
    sorted
        .into_iter()
        .map(|item| {
            json!({
                "tag": item.version,
                "repository": item.repository,
                "assets": item.assets.iter().map(asset_json).collect::<Vec<_>>(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, version: &str) -> SearchResult {
        SearchResult {
            id: format!("{name}:{version}"),
            repository: "docker-hosted".to_string(),
            group: None,
            name: name.to_string(),
            version: version.to_string(),
            format: DOCKER_FORMAT.to_string(),
            assets: vec![],
        }
    }

    #[test]
    fn groups_rows_into_one_image_with_tags() {
        let items = vec![item("my-app", "latest"), item("my-app", "v1")];
        let images = group_images(&items);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0]["name"], "my-app");
        assert_eq!(images[0]["repository"], "docker-hosted");
        // Descending string order: 'v' sorts after 'l'.
        assert_eq!(images[0]["tags"], json!(["v1", "latest"]));
    }

    #[test]
    fn numeric_tags_sort_descending_by_string() {
        let items = vec![item("my-app", "1.0"), item("my-app", "2.0")];
        let images = group_images(&items);
        assert_eq!(images[0]["tags"], json!(["2.0", "1.0"]));
    }

    #[test]
    fn duplicate_and_empty_tags_are_dropped() {
        let items = vec![
            item("my-app", "latest"),
            item("my-app", "latest"),
            item("my-app", ""),
        ];
        let images = group_images(&items);
        assert_eq!(images[0]["tags"], json!(["latest"]));
    }

    #[test]
    fn distinct_images_stay_separate() {
        let items = vec![item("my-app", "latest"), item("other-app", "v2")];
        let images = group_images(&items);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0]["name"], "my-app");
        assert_eq!(images[1]["name"], "other-app");
    }

    #[test]
    fn tag_entries_sort_descending() {
        let items = vec![item("my-app", "1.0"), item("my-app", "2.0")];
        let tags = tag_entries(&items);
        assert_eq!(tags[0]["tag"], "2.0");
        assert_eq!(tags[1]["tag"], "1.0");
    }

    #[tokio::test]
    async fn list_images_requires_repository() {
        let result =
            list_docker_images(&ConnectionDefaults::default(), json!({})).await;
        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid parameters:"));
        assert!(message.contains("repository"));
    }

    #[tokio::test]
    async fn get_tags_requires_image_name() {
        let result = get_docker_tags(
            &ConnectionDefaults::default(),
            json!({ "repository": "docker-hosted" }),
        )
        .await;
        let message = result["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid parameters:"));
        assert!(message.contains("image_name"));
    }
}
