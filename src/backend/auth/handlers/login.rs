/**
 * Login Handler
 *
 * Implements `POST /api/auth`.
 *
 * # Authentication Process
 *
 * 1. Validate the body (valid email, password present)
 * 2. Look up the user by email
 * 3. Verify the password using bcrypt
 * 4. Return a signed token
 *
 * # Security
 *
 * An unknown email and a wrong password produce exactly the same response,
 * so the endpoint does not reveal which accounts exist.
 */
use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::shared::validation::Validator;
use crate::shared::AppConfig;

/// Check an email/password pair and issue a token for the matching user
///
/// # Errors
///
/// * `InvalidCredentials` - no such user, or the password does not match
/// * `DatabaseError` / `InternalError` - lookup, hashing or signing failed
pub async fn verify_credentials(
    pool: &SqlitePool,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> Result<String, BackendError> {
    let user = match get_user_by_email(pool, email).await? {
        Some(user) => user,
        None => {
            tracing::warn!("Login attempt for unknown email");
            return Err(BackendError::InvalidCredentials);
        }
    };

    if !verify(password, &user.password_hash)? {
        tracing::warn!("Invalid password for user {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = create_token(user.id, config)?;
    tracing::info!("User logged in: {}", user.id);
    Ok(token)
}

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "jane@example.com", "password": "hunter22" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;

    let mut validator = Validator::new();
    validator
        .email("email", request.email.as_deref(), "Please include a valid email")
        .exists("password", request.password.as_deref(), "Password is required");
    validator.finish()?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    let token = verify_credentials(&pool, &config, &email, &password).await?;

    Ok(Json(TokenResponse { token }))
}
