//! Integration tests
//!
//! Tests that drive the full router through `axum_test::TestServer`.
