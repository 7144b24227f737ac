/**
 * Authentication Extractor
 *
 * Protects private routes. `AuthUser` is an axum extractor that reads the
 * bearer token, verifies it, and hands the verified identity to the
 * handler; if anything is wrong the request is short-circuited with a 401
 * before the handler runs.
 *
 * The token is read from `Authorization: Bearer <token>` or, for older
 * clients, from the `x-auth-token` header.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::authenticate;
use crate::backend::error::types::{BackendError, NO_TOKEN};
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Legacy header carrying the raw token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Identity verified from a bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Pull the raw token out of the request headers, if one was sent
///
/// A bearer `Authorization` header wins. Any other scheme is ignored and the
/// legacy `x-auth-token` header is consulted instead.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .and_then(|value| {
            value
                .strip_prefix("Bearer ")
                .or_else(|| value.strip_prefix("bearer "))
        })
        .map(str::trim)
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

/// Verify the token carried by `headers`
///
/// # Errors
///
/// * `401 No token, authorization denied` - no usable token header
/// * `401 Token is not valid` - bad signature, expired or malformed
pub fn authenticate_headers(
    headers: &HeaderMap,
    config: &AppConfig,
) -> Result<AuthenticatedUser, BackendError> {
    let token = token_from_headers(headers).ok_or_else(|| {
        tracing::warn!("Missing authentication token");
        BackendError::unauthorized(NO_TOKEN)
    })?;

    let user_id = authenticate(token, config)?;
    Ok(AuthenticatedUser { user_id })
}

/// Axum extractor for the authenticated user
///
/// # Example
///
/// ```rust,no_run
/// use campus_connect::backend::middleware::AuthUser;
///
/// async fn handler(AuthUser(user): AuthUser) -> String {
///     user.user_id.to_string()
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(*user));
        }

        let user = authenticate_headers(&parts.headers, &state.config)?;
        parts.extensions.insert(user);
        Ok(AuthUser(user))
    }
}
