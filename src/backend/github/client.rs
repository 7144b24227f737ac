/**
 * GitHub REST Client
 *
 * Fetches the five earliest-created public repositories of a user. The
 * base URL comes from `AppConfig::github_api_url` so tests can point it at
 * a mock server. Requests are sent once; there is no retry.
 */

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::shared::AppConfig;

const CLIENT_USER_AGENT: &str = concat!("campus-connect/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REPOS_PER_PAGE: &str = "5";
const REPOS_SORT: &str = "created:asc";

/// A repository as returned by GitHub
///
/// The fields the frontend renders are typed; everything else GitHub sends
/// is kept in `extra` and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Cloneable GitHub API client
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.github_api_url.clone(),
            token: config.github_token.clone(),
        }
    }

    /// `{base}/users/{username}/repos?per_page=5&sort=created:asc`
    fn repos_url(&self, username: &str) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| BackendError::upstream(format!("invalid GitHub base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| BackendError::upstream("GitHub base URL cannot have a path"))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        url.query_pairs_mut()
            .append_pair("per_page", REPOS_PER_PAGE)
            .append_pair("sort", REPOS_SORT);

        Ok(url)
    }

    /// Fetch the public repositories of `username`
    ///
    /// # Errors
    ///
    /// Every failure (bad URL, network, non-2xx status, undecodable body)
    /// becomes `BackendError::UpstreamError`.
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<GithubRepo>, BackendError> {
        let url = self.repos_url(username)?;

        let mut request = self.http.get(url).header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::upstream(format!("GitHub request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GitHub returned {} for user {}", status, username);
            return Err(BackendError::upstream(format!("GitHub returned {}", status)));
        }

        response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| BackendError::upstream(format!("invalid GitHub response: {}", e)))
    }
}
