//! Profile Module
//!
//! Per-user profile documents with nested experience and education
//! entries, plus the account deletion cascade.
//!
//! # Module Structure
//!
//! ```text
//! profile/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Queries, upsert and the delete transaction
//! └── handlers.rs  - HTTP handlers and request validation
//! ```

pub mod db;
pub mod handlers;

pub use handlers::{
    add_education, add_experience, delete_account, get_own_profile, get_profile_by_user_id,
    list_profiles, remove_education, remove_experience, upsert_profile,
};
