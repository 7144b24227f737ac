//! GitHub proxy integration tests
//!
//! The GitHub API is replaced by a `wiremock` server.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{assert_msg, create_test_server, create_test_server_with_github};

#[tokio::test]
async fn test_github_repos_passthrough() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "5"))
        .and(query_param("sort", "created:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "hello-world",
                "html_url": "https://github.com/octocat/hello-world",
                "description": "My first repo",
                "stargazers_count": 10,
                "watchers_count": 10,
                "forks_count": 2,
                "language": "Rust",
                "owner": { "login": "octocat" }
            }
        ])))
        .expect(1)
        .mount(&github)
        .await;

    let server = create_test_server_with_github(&github.uri()).await;
    let response = server.get("/api/profile/github/octocat").await;
    response.assert_status_ok();

    let repos: Vec<Value> = response.json();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0]["name"], "hello-world");
    assert_eq!(repos[0]["stargazers_count"], 10);
    assert_eq!(repos[0]["language"], "Rust");
    assert_eq!(repos[0]["owner"]["login"], "octocat");
}

#[tokio::test]
async fn test_github_unknown_user() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&github)
        .await;

    let server = create_test_server_with_github(&github.uri()).await;
    let response = server.get("/api/profile/github/nobody").await;
    assert_msg(&response, StatusCode::NOT_FOUND, "No Github profile found");
}

#[tokio::test]
async fn test_github_unreachable() {
    let server = create_test_server().await;
    let response = server.get("/api/profile/github/octocat").await;
    assert_msg(&response, StatusCode::NOT_FOUND, "No Github profile found");
}
