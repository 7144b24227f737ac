//! Authentication Module
//!
//! User registration, credential verification, and bearer tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token creation and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Current user**: token → verified by `AuthUser` → user returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs signed with `AppConfig::jwt_secret`
//! - Tokens expire after `AppConfig::token_ttl_secs` (100 hours by default)
//! - Failed logins never reveal whether the email exists

/// User data model and database operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, verify_credentials};
pub use handlers::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
