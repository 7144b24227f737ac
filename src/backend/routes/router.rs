/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Landing page
 * 2. API routes (users, auth, posts)
 * 3. Profile routes
 * 4. Static files
 * 5. Fallback handler (404)
 */

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::landing::landing;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::profile_routes::configure_profile_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool, configuration and GitHub client
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(landing));

    let router = configure_api_routes(router);
    let router = configure_profile_routes(router);

    // Static assets for the landing page
    let router = router.nest_service("/static", ServeDir::new("public"));

    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
