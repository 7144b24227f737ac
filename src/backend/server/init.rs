/**
 * Server Initialization
 *
 * Builds the Axum application from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and run migrations
 * 2. Create the shared `AppState` (pool, config, GitHub client)
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Campus Connect backend");

    let db_pool = load_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
