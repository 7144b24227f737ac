//! GitHub lookup handler

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::github::client::{GithubClient, GithubRepo};

/// Proxy a user's repositories from GitHub
///
/// Upstream failures surface as `BackendError::UpstreamError`, which is
/// answered with `404 No Github profile found`.
pub async fn get_github_repos(
    State(github): State<GithubClient>,
    Path(username): Path<String>,
) -> Result<Json<Vec<GithubRepo>>, BackendError> {
    Ok(Json(github.fetch_repos(&username).await?))
}
