//! Authentication test helpers
//!
//! Users are created through the public API so the tests exercise the same
//! path as real clients.

use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use campus_connect::backend::auth::sessions::verify_token;
use super::database::TEST_JWT_SECRET;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user and return its credentials and token
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/api/users")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let token = body["token"]
        .as_str()
        .expect("registration returns a token")
        .to_string();
    let claims = verify_token(&token, TEST_JWT_SECRET).expect("token verifies");

    TestUser {
        id: Uuid::parse_str(&claims.sub).expect("subject is a user id"),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    register_user(server, "Test User", &email, "password123").await
}

/// Create a profile for `user` with the minimum required fields
pub async fn create_basic_profile(server: &TestServer, user: &TestUser) -> Value {
    let response = server
        .post("/api/profile")
        .authorization_bearer(&user.token)
        .json(&json!({ "status": "Student", "skills": "rust, sql" }))
        .await;
    response.assert_status_ok();
    response.json()
}
