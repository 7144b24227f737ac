/**
 * Post HTTP Handlers
 *
 * - POST /api/posts - Create a post as the authenticated user
 * - GET  /api/posts - List all posts, newest first
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db;
use crate::shared::validation::Validator;
use crate::shared::{CreatePostRequest, Post};

/// Create a post
///
/// # Errors
///
/// * `400 Text is required` - missing or blank text
/// * `404 User not found` - the token outlived its account
pub async fn create_post(
    State(pool): State<SqlitePool>,
    AuthUser(auth): AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, BackendError> {
    let Json(request) = payload?;

    let mut validator = Validator::new();
    validator.required("text", request.text.as_deref(), "Text is required");
    validator.finish()?;

    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    let text = request.text.unwrap_or_default();
    let post = db::create_post(&pool, user.id, text.trim(), &user.name, &user.avatar).await?;

    tracing::info!("Post {} created by {}", post.id, user.id);
    Ok(Json(post))
}

/// List posts, newest first
pub async fn list_posts(
    State(pool): State<SqlitePool>,
    AuthUser(_): AuthUser,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(db::list_posts(&pool).await?))
}
