//! Response assertions
//!
//! The API has two error shapes: `{"msg": ...}` for auth and not-found
//! errors, and `{"errors": [{"msg", "param", "location"}]}` for rejected
//! input. These helpers check status and shape together.

use axum::http::StatusCode;
use axum_test::TestResponse;
use pretty_assertions::assert_eq;
use serde_json::Value;

/// Assert a `{"msg": ...}` error response
pub fn assert_msg(response: &TestResponse, status: StatusCode, msg: &str) {
    assert_eq!(response.status_code(), status);
    let body: Value = response.json();
    assert_eq!(body["msg"], msg);
}

/// Assert a `400 {"errors": [...]}` response and return its messages
pub fn assert_field_errors(response: &TestResponse) -> Vec<String> {
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let errors = body["errors"].as_array().expect("errors array");
    assert!(!errors.is_empty(), "expected at least one error");
    errors
        .iter()
        .map(|e| e["msg"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
