//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer-token verification via the `AuthUser` extractor

pub mod auth;

pub use auth::{authenticate_headers, token_from_headers, AuthUser, AuthenticatedUser};
