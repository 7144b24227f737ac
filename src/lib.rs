//! Campus Connect - Main Library
//!
//! Campus Connect is the backend of a small student social network: users
//! register and sign in with bearer tokens, keep a profile with their
//! experience, education, skills and social links, write posts, and show
//! their GitHub repositories.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the HTTP layer and its clients
//!   - Configuration (`AppConfig`)
//!   - Profile and post documents, request bodies
//!   - Field-level validation and error types
//!
//! - **`backend`** - The Axum server
//!   - Authentication and the `AuthUser` extractor
//!   - Profile, post and GitHub handlers
//!   - SQLite persistence through `sqlx`
//!
//! # Usage
//!
//! ```rust,no_run
//! use campus_connect::backend::server::create_app;
//! use campus_connect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error` - `FieldError` and `SharedError` for request validation
//! - `backend::error` - `BackendError`, mapped to HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
