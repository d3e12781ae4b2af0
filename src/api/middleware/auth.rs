use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;
use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::api::AppState;

/// Axum extractor that validates a Bearer JWT token.
/// Add this as a handler parameter to require authentication.
pub struct AuthUser(pub Claims);

/// Like [`AuthUser`] but never rejects; anonymous requests yield `None`.
pub struct MaybeUser(pub Option<Claims>);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Claims of a well-formed, unexpired, unrevoked token.
fn session_claims(parts: &Parts, state: &AppState) -> Option<Claims> {
    let token = bearer_token(parts)?;
    let claims = crate::auth::jwt::verify(token, &state.jwt_secret).ok()?;
    if state.revoked.is_revoked(&claims.jti) {
        return None;
    }
    Some(claims)
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        session_claims(parts, state)
            .map(AuthUser)
            .ok_or(AppError::LoginRequired)
    }
}

impl FromRequestParts<Arc<AppState>> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_claims(parts, state)))
    }
}
