/**
 * Session Tokens
 *
 * Issues and verifies the signed bearer tokens used on private routes.
 * Verification is stateless: a token stays valid until it expires, even if
 * its user has been deleted in the meantime.
 */

use jsonwebtoken::{decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::types::{BackendError, INVALID_TOKEN};
use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Create a token for a user, valid for `config.token_ttl_secs`
pub fn create_token(user_id: Uuid, config: &AppConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = get_current_timestamp();
    sign_claims(
        &Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + config.token_ttl_secs,
        },
        &config.jwt_secret,
    )
}

/// Sign arbitrary claims with the given secret
pub fn sign_claims(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify signature and expiry, returning the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

/// Verify a token and extract the user ID it was issued for
///
/// Every failure (bad signature, expired, malformed, non-UUID subject) is
/// reported as `401 Token is not valid`.
pub fn authenticate(token: &str, config: &AppConfig) -> Result<Uuid, BackendError> {
    let claims = verify_token(token, &config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })
}
