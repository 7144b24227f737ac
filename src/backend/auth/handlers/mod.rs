//! Authentication Handlers Module
//!
//! HTTP handlers for registration, login and current-user lookup.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /api/users
//! ├── login.rs     - POST /api/auth
//! └── me.rs        - GET /api/auth
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

pub use login::{login, verify_credentials};
pub use me::get_me;
pub use register::register;
