use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::types::SESSION_TTL_SECS;
use crate::error::AuthServiceError;

/// JWT claims of a session token. `user` in the profile response is this
/// payload, as the original echoed the decoded JWT back to the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    /// Issued-at (seconds since epoch).
    pub iat: u64,
    /// Expiration (seconds since epoch), 1 hour after `iat`.
    pub exp: u64,
}

/// Errors from [`validate_session_token`]. The profile endpoint collapses
/// all three to 403; the split exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a session token asserting a verified email, valid for 1 hour.
pub fn issue_session_token(email: &str, secret: &str) -> Result<String, AuthServiceError> {
    let iat = now_secs();
    let claims = SessionClaims {
        email: email.to_owned(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthServiceError::Internal(e.into()))
}

/// Check signature and expiry, returning the claims. HS256, `exp` required,
/// zero leeway — a token is rejected the moment it expires.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    Ok(data.claims)
}
