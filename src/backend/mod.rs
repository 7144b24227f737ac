//! Backend Module
//!
//! This module contains all server-side code for Campus Connect: an Axum
//! HTTP server backed by SQLite that serves user accounts, profiles, posts
//! and a GitHub repository lookup.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Application state, database setup, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, bearer tokens, user records
//! - **`middleware`** - The `AuthUser` extractor
//! - **`profile`** - Profiles with experience and education entries
//! - **`posts`** - Posts and their removal with the account
//! - **`github`** - GitHub REST client and proxy handler
//! - **`landing`** - Server-rendered landing page
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request extractors
//! ├── profile/        - Profiles
//! ├── posts/          - Posts
//! ├── github/         - GitHub lookup
//! ├── landing/        - Landing page
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the `Arc<AppConfig>` and the GitHub
//! client. Handlers extract only the part they need through `FromRef`.
//! There is no in-process mutable state; the database is the only shared
//! store.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>` and propagate with `?`. The
//! `IntoResponse` impl in `error::conversion` turns each variant into the
//! status code and body clients expect.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Profiles with experience and education
pub mod profile;

/// Posts
pub mod posts;

/// GitHub repository lookup
pub mod github;

/// Landing page
pub mod landing;

pub use error::BackendError;
pub use server::{create_app, AppState};
