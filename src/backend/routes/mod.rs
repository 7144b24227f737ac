//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation
//! ├── api_routes.rs      - Users, auth and posts
//! └── profile_routes.rs  - Profiles, entries and the GitHub lookup
//! ```
//!
//! # Route Order
//!
//! 1. **Landing** - `GET /`
//! 2. **API Routes** - registration, login, current user, posts
//! 3. **Profile Routes** - everything under `/api/profile`
//! 4. **Static Files** - `/static` served from `public/`
//! 5. **Fallback** - `404 {"msg": "Not found"}`
//!
//! # Example
//!
//! ```rust,no_run
//! use campus_connect::backend::routes::create_router;
//! use campus_connect::backend::server::{config::load_database, AppState};
//! use campus_connect::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let pool = load_database(&config.database_url).await?;
//! let router = create_router(AppState::new(pool, config));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// User, auth and post endpoints
pub mod api_routes;

/// Profile endpoints
pub mod profile_routes;

pub use router::create_router;
