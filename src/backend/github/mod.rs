//! GitHub Module
//!
//! Lookup of a user's public repositories on the GitHub REST API, exposed
//! as `GET /api/profile/github/{username}`.

pub mod client;
pub mod handlers;

pub use client::{GithubClient, GithubRepo};
pub use handlers::get_github_repos;
