//! Test servers and fixtures
//!
//! Every server gets its own `sqlite::memory:` database, so tests never
//! share state and need no cleanup.

use axum_test::TestServer;
use campus_connect::backend::server::create_app;
use campus_connect::shared::AppConfig;

/// Secret used to sign tokens in tests
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Configuration for a test server
///
/// bcrypt runs at its minimum cost to keep the suite fast.
pub fn test_config(github_api_url: &str) -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(4)
        .database_url("sqlite::memory:")
        .github_api_url(github_api_url)
        .build()
        .expect("test configuration is valid")
}

/// Test server whose GitHub client points at `github_api_url`
pub async fn create_test_server_with_github(github_api_url: &str) -> TestServer {
    let app = create_app(test_config(github_api_url))
        .await
        .expect("Failed to create test app");
    TestServer::new(app).expect("Failed to start test server")
}

/// Test server with an unreachable GitHub endpoint
pub async fn create_test_server() -> TestServer {
    create_test_server_with_github("http://127.0.0.1:9").await
}
