//! Session token codec.
//!
//! Tokens are compact JWTs signed with HMAC-SHA256. Everything the gateway
//! needs for an authorization decision (identity, display name, role,
//! validity window) travels inside the claims, so verification never has to
//! consult the directory. Signature comparison happens in constant time
//! inside `jsonwebtoken`.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::auth::AuthConfig;
use crate::directory::model::UserRecord;
use crate::modules::auth::model::SessionClaims;
use crate::utils::errors::AppError;

/// Creates a signed session token for a freshly authenticated user.
///
/// `exp` is `now + session_ttl`, the same TTL the session cookie carries.
pub fn create_session_token(user: &UserRecord, config: &AuthConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + config.session_ttl as usize;

    let claims = SessionClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.display_name.clone(),
        role: user.role,
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create session token: {}", e)))
}

/// Verifies a session token and returns the embedded claims.
///
/// Fails on a bad signature, a malformed token, or an expired `exp`; the
/// three cases are indistinguishable to the caller. No issuer or audience
/// validation is performed.
pub fn verify_session_token(token: &str, config: &AuthConfig) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired session token")))
}
