//! Posts Module
//!
//! Minimal posts: create, list newest first, and removal of every post of
//! a user when their account is deleted.

pub mod db;
pub mod handlers;

pub use handlers::{create_post, list_posts};
