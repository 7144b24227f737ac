//! Posts API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_field_errors, assert_msg, create_test_server, register_user};

#[tokio::test]
async fn test_create_and_list_posts() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    for text in ["first", "second"] {
        let response = server
            .post("/api/posts")
            .authorization_bearer(&user.token)
            .json(&json!({ "text": text }))
            .await;
        response.assert_status_ok();
        let post: Value = response.json();
        assert_eq!(post["name"], "Jane");
        assert_eq!(post["user"], user.id.to_string());
    }

    let posts: Vec<Value> = server
        .get("/api/posts")
        .authorization_bearer(&user.token)
        .await
        .json();
    let texts: Vec<&str> = posts.iter().map(|p| p["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["second", "first"]);
}

#[tokio::test]
async fn test_create_post_requires_text() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server
        .post("/api/posts")
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "   " }))
        .await;
    assert_eq!(assert_field_errors(&response), vec!["Text is required"]);
}

#[tokio::test]
async fn test_posts_require_token() {
    let server = create_test_server().await;
    let response = server.get("/api/posts").await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}
