//! Landing page integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::assert_contains;
use crate::common::{assert_msg, create_test_server, register_unique_user};

#[tokio::test]
async fn test_landing_without_token() {
    let server = create_test_server().await;
    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert_contains!(html, "UCSB CONNECT");
    assert_contains!(html, r#"href="/register""#);
    assert_contains!(html, r#"href="/login""#);
}

#[tokio::test]
async fn test_landing_redirects_with_token() {
    let server = create_test_server().await;
    let user = register_unique_user(&server).await;

    let response = server.get("/").authorization_bearer(&user.token).await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/dashboard");
}

#[tokio::test]
async fn test_landing_ignores_invalid_token() {
    let server = create_test_server().await;
    let response = server.get("/").authorization_bearer("garbage").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = create_test_server().await;
    let response = server.get("/api/nothing-here").await;
    assert_msg(&response, StatusCode::NOT_FOUND, "Not found");
}
