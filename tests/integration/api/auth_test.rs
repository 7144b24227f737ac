//! Authentication API integration tests
//!
//! Tests for registration, login, and the current-user endpoint.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{
    assert_field_errors, assert_msg, create_test_server, register_user, test_config,
};
use campus_connect::backend::auth::sessions::{authenticate, sign_claims, Claims};

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server.get("/api/auth").authorization_bearer(&user.token).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["name"], "Jane");
    assert_eq!(body["email"], "jane@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server().await;
    register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server
        .post("/api/users")
        .json(&json!({
            "name": "Other Jane",
            "email": "Jane@Example.com",
            "password": "password456"
        }))
        .await;

    assert_eq!(assert_field_errors(&response), vec!["User already exists"]);
}

#[tokio::test]
async fn test_register_validation_errors() {
    let server = create_test_server().await;
    let response = server
        .post("/api/users")
        .json(&json!({ "email": "not-an-email", "password": "123" }))
        .await;

    assert_eq!(
        assert_field_errors(&response),
        vec![
            "Name is required",
            "Please include a valid email",
            "Please enter a password with 6 or more characters",
        ]
    );
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "jane@example.com", "password": "password123" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();
    let config = test_config("http://127.0.0.1:9");
    assert_eq!(authenticate(token, &config).unwrap(), user.id);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = create_test_server().await;
    register_user(&server, "Jane", "jane@example.com", "password123").await;

    let wrong_password = server
        .post("/api/auth")
        .json(&json!({ "email": "jane@example.com", "password": "wrong-password" }))
        .await;
    let unknown_email = server
        .post("/api/auth")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.text(), unknown_email.text());
    assert_eq!(
        wrong_password.json::<Value>(),
        json!({ "errors": [{ "msg": "Invalid credentials" }] })
    );
}

#[tokio::test]
async fn test_login_requires_password() {
    let server = create_test_server().await;
    let response = server
        .post("/api/auth")
        .json(&json!({ "email": "jane@example.com" }))
        .await;

    assert_eq!(assert_field_errors(&response), vec!["Password is required"]);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = create_test_server().await;
    let response = server
        .post("/api/auth")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_field_errors(&response);
}

#[tokio::test]
async fn test_me_without_token() {
    let server = create_test_server().await;
    let response = server.get("/api/auth").await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_me_with_invalid_token() {
    let server = create_test_server().await;
    let response = server.get("/api/auth").authorization_bearer("garbage").await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "Token is not valid");
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let expired = sign_claims(
        &Claims {
            sub: user.id.to_string(),
            iat: 1_000,
            exp: 2_000,
        },
        crate::common::TEST_JWT_SECRET,
    )
    .unwrap();

    let response = server.get("/api/auth").authorization_bearer(&expired).await;
    assert_msg(&response, StatusCode::UNAUTHORIZED, "Token is not valid");
}

#[tokio::test]
async fn test_legacy_token_header() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server
        .get("/api/auth")
        .add_header(
            HeaderName::from_static("x-auth-token"),
            HeaderValue::from_str(&user.token).unwrap(),
        )
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_legacy_token_header_alongside_basic_authorization() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    let response = server
        .get("/api/auth")
        .add_header(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        )
        .add_header(
            HeaderName::from_static("x-auth-token"),
            HeaderValue::from_str(&user.token).unwrap(),
        )
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["email"], "jane@example.com");
}

#[tokio::test]
async fn test_me_after_account_deleted() {
    let server = create_test_server().await;
    let user = register_user(&server, "Jane", "jane@example.com", "password123").await;

    server
        .delete("/api/profile")
        .authorization_bearer(&user.token)
        .await
        .assert_status_ok();

    let response = server.get("/api/auth").authorization_bearer(&user.token).await;
    assert_msg(&response, StatusCode::NOT_FOUND, "User not found");
}
