/**
 * Profile Route Handlers
 *
 * # Routes
 *
 * - `GET /api/profile` - All profiles
 * - `POST /api/profile` - Create or update own profile (private)
 * - `DELETE /api/profile` - Delete own posts, profile and account (private)
 * - `GET /api/profile/me` - Own profile (private)
 * - `GET /api/profile/user/{user_id}` - Profile by user id
 * - `PUT /api/profile/experience` - Add experience (private)
 * - `DELETE /api/profile/experience/{exp_id}` - Remove experience (private)
 * - `PUT /api/profile/education` - Add education (private)
 * - `DELETE /api/profile/education/{edu_id}` - Remove education (private)
 * - `GET /api/profile/github/{username}` - Proxy GitHub repositories
 */

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::backend::github::get_github_repos;
use crate::backend::profile::{
    add_education, add_experience, delete_account, get_own_profile, get_profile_by_user_id,
    list_profiles, remove_education, remove_experience, upsert_profile,
};
use crate::backend::server::state::AppState;

/// Configure profile routes
pub fn configure_profile_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/profile",
            get(list_profiles).post(upsert_profile).delete(delete_account),
        )
        .route("/api/profile/me", get(get_own_profile))
        .route("/api/profile/user/{user_id}", get(get_profile_by_user_id))
        .route("/api/profile/experience", put(add_experience))
        .route("/api/profile/experience/{exp_id}", delete(remove_experience))
        .route("/api/profile/education", put(add_education))
        .route("/api/profile/education/{edu_id}", delete(remove_education))
        .route("/api/profile/github/{username}", get(get_github_repos))
}
