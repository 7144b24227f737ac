/**
 * Registration Handler
 *
 * Implements `POST /api/users`.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password length
 * 2. Reject an email that is already registered
 * 3. Hash the password using bcrypt at the configured cost
 * 4. Create the user and return a token for immediate use
 */

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use bcrypt::hash;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::shared::validation::{non_empty, Validator};
use crate::shared::AppConfig;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Register handler
///
/// # Errors
///
/// * `400` with field errors - invalid name, email or password
/// * `400 User already exists` - email taken
/// * `500` - hashing, insert or signing failed
pub async fn register(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;

    let mut validator = Validator::new();
    validator
        .required("name", request.name.as_deref(), "Name is required")
        .email("email", request.email.as_deref(), "Please include a valid email")
        .min_len(
            "password",
            request.password.as_deref(),
            MIN_PASSWORD_LEN,
            "Please enter a password with 6 or more characters",
        );
    validator.finish()?;

    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    let avatar = non_empty(request.avatar).unwrap_or_default();

    if get_user_by_email(&pool, &email).await?.is_some() {
        tracing::warn!("Registration for existing email rejected");
        return Err(BackendError::bad_request("User already exists"));
    }

    let password_hash = hash(&password, config.bcrypt_cost)?;
    let user = create_user(&pool, &name, &email, &password_hash, &avatar)
        .await
        .map_err(user_insert_error)?;
    let token = create_token(user.id, &config)?;

    tracing::info!("User registered: {}", user.id);
    Ok(Json(TokenResponse { token }))
}

/// A concurrent registration can win the race between the lookup and the
/// insert; the UNIQUE constraint on `users.email` then decides.
fn user_insert_error(err: sqlx::Error) -> BackendError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        tracing::warn!("Registration lost a race on an existing email");
        return BackendError::bad_request("User already exists");
    }
    BackendError::from(err)
}
