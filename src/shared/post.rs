//! Post Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Author's user id
    pub user: Uuid,
    pub text: String,
    /// Author name at the time of posting
    pub name: String,
    /// Author avatar at the time of posting
    pub avatar: String,
    pub date: DateTime<Utc>,
}

/// Body of `POST /api/posts`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub text: Option<String>,
}
