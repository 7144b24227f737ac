//! Shared Error Types
//!
//! This module defines the error types shared by request validation and the
//! HTTP layer. Validation never stops at the first problem: every failing
//! field is reported as a [`FieldError`], and the whole list travels in a
//! single [`SharedError::ValidationError`].
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more request fields failed validation
//!
//! # Usage
//!
//! ```rust
//! use campus_connect::shared::error::{FieldError, SharedError};
//!
//! let error = SharedError::validation(vec![FieldError::body("status", "Status is required")]);
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure
///
/// Serialized as `{"msg": ..., "param": ..., "location": "body"}`, which is
/// the shape clients of the API already expect inside an `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable message
    pub msg: String,
    /// Name of the offending field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Where the field was read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl FieldError {
    /// Error attached to a field of the JSON body
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
        }
    }

    /// Error that is not tied to a field
    pub fn general(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }
}

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// One or more fields failed validation
    #[error("Validation failed: {}", summarize(.errors))]
    ValidationError {
        /// Every failing field, in the order the checks ran
        errors: Vec<FieldError>,
    },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl SharedError {
    /// Create a new validation error from collected field errors
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationError { errors }
    }

    /// Every collected field error, in check order
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::ValidationError { errors } => errors,
        }
    }
}
