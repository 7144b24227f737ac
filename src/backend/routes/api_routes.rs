/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Users and authentication
 * - `POST /api/users` - Register, returns a token
 * - `POST /api/auth` - Login, returns a token
 * - `GET /api/auth` - Current user (requires authentication)
 *
 * ## Posts
 * - `POST /api/posts` - Create a post (requires authentication)
 * - `GET /api/posts` - List posts (requires authentication)
 */

use axum::{routing::post, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::posts::{create_post, list_posts};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication is enforced per handler by the `AuthUser` extractor, so
/// public and private handlers can share a path.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/users", post(register))
        .route("/api/auth", post(login).get(get_me))
        .route("/api/posts", post(create_post).get(list_posts))
}
