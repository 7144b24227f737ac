/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds everything handlers share:
 * - The SQLite connection pool
 * - The application configuration (secrets, upstream endpoints)
 * - The GitHub API client
 *
 * Every field is cheap to clone; there is no other shared mutable state.
 * Concurrent writes to the same record are last-write-wins at the database.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::github::GithubClient;
use crate::shared::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Client for the GitHub repository lookup
    pub github: GithubClient,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: AppConfig) -> Self {
        let github = GithubClient::new(&config);
        Self {
            db_pool,
            config: Arc::new(config),
            github,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for GithubClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.github.clone()
    }
}
