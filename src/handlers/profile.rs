use axum::http::{HeaderMap, header};
use axum::{Json, extract::State};
use serde::Serialize;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::token::{SessionClaims, validate_session_token};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: SessionClaims,
}

/// Extract the token from the `Authorization` header: the second
/// space-separated part, whatever the scheme. A present-but-wrong token
/// (e.g. a `Basic` credential) therefore reaches verification and fails
/// there with 403; only an absent header or a bare scheme is "no token"
/// (401).
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
}

pub async fn profile<M>(
    State(state): State<AppState<M>>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, AuthServiceError>
where
    M: Clone + Send + Sync + 'static,
{
    // Absent token → 401; present but unverifiable (bad signature, expired,
    // malformed) → 403.
    let token = bearer_token(&headers).ok_or(AuthServiceError::MissingToken)?;
    let claims = validate_session_token(token, &state.jwt_secret)
        .map_err(|_| AuthServiceError::InvalidToken)?;

    Ok(Json(ProfileResponse {
        message: format!("Selamat datang, {}", claims.email),
        user: claims,
    }))
}
