/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the API. Every handler returns
 * `Result<_, BackendError>`, and the variant decides the HTTP status and the
 * response body (see `conversion.rs`).
 *
 * # Error Categories
 *
 * - Validation: field-level problems with the request body (400)
 * - Credentials: unknown email or wrong password, reported identically (400)
 * - Authentication: missing, malformed or expired bearer token (401)
 * - Not found: missing profile, entry or user (404)
 * - Upstream: the GitHub lookup failed for any reason (404)
 * - Unexpected: database and internal failures (500, details only logged)
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{FieldError, SharedError};

/// Message returned for any failed login attempt
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
/// Message returned when a private route is called without a token
pub const NO_TOKEN: &str = "No token, authorization denied";
/// Message returned when a token fails verification
pub const INVALID_TOKEN: &str = "Token is not valid";
/// Message returned when the GitHub lookup fails
pub const NO_GITHUB_PROFILE: &str = "No Github profile found";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use campus_connect::backend::error::BackendError;
///
/// let err = BackendError::not_found("Profile not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request was well-formed but rejected (duplicate email, bad JSON)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// A requested resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// GitHub API call failed
    #[error("Upstream error: {message}")]
    UpstreamError { message: String },

    /// One or more request fields failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Anything else that should surface as a 500
    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl BackendError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamError {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `SharedError`, `BadRequest`, `InvalidCredentials` - 400
    /// - `Unauthorized` - 401
    /// - `NotFound`, `UpstreamError` - 404
    /// - `DatabaseError`, `InternalError` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) | Self::BadRequest { .. } | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } | Self::UpstreamError { .. } => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) | Self::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Field errors for the `{"errors": [...]}` response shape, if this
    /// error uses it
    pub fn field_errors(&self) -> Option<Vec<FieldError>> {
        match self {
            Self::SharedError(err) => Some(err.field_errors().to_vec()),
            Self::BadRequest { message } => Some(vec![FieldError::general(message.clone())]),
            Self::InvalidCredentials => Some(vec![FieldError::general(INVALID_CREDENTIALS)]),
            _ => None,
        }
    }

    /// Message safe to show to the client
    ///
    /// Upstream, database and internal details are never exposed.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthorized { message } | Self::NotFound { message } => message.clone(),
            Self::BadRequest { message } => message.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::UpstreamError { .. } => NO_GITHUB_PROFILE.to_string(),
            Self::SharedError(_) => "Validation failed".to_string(),
            Self::DatabaseError(_) | Self::InternalError { .. } => "Server Error".to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("bcrypt: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::internal(format!("jwt: {}", err))
    }
}
