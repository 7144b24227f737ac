//! Shared Types Module
//!
//! Types used on both sides of the HTTP boundary: request/response bodies,
//! field-level validation errors, and the application configuration.
//!
//! # Module Structure
//!
//! ```text
//! shared/
//! ├── mod.rs          - Module exports
//! ├── config/         - AppConfig, builder, file/env loading
//! ├── error.rs        - FieldError and SharedError
//! ├── validation.rs   - Validator and input normalization
//! ├── profile.rs      - Profile, Experience, Education, request bodies
//! └── post.rs         - Post and its request body
//! ```

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

/// Request validation helpers
pub mod validation;

/// Profile data structures
pub mod profile;

/// Post data structures
pub mod post;

pub use config::{AppConfig, ConfigError};
pub use error::{FieldError, SharedError};
pub use post::{CreatePostRequest, Post};
pub use profile::{
    Education, EducationRequest, Experience, ExperienceRequest, Profile, ProfileOwner,
    ProfileRequest, SkillsInput, Social,
};
