use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use crate::api::AppState;
use crate::api::middleware::auth::{AuthUser, MaybeUser};
use crate::api::middleware::json::ValidJson;
use crate::auth::accounts;
use crate::db::models::user::{LoginRequest, RegisterRequest};
use crate::error::{AppError, AppResult};

pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> AppResult<Json<Value>> {
    let user = accounts::register(&state.db, req).await?;

    Ok(Json(json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "role": user.role,
        "created_at": user.created_at,
        "message": "Registration successful! Please log in.",
    })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AppResult<Json<Value>> {
    let user = accounts::login(&state.db, &req.username, &req.password).await?;

    let token = crate::auth::jwt::generate(&user, &state.jwt_secret, state.jwt_expiry_hours)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({
        "token": token,
        "expires_in": state.jwt_expiry_hours * 3600,
        "user": {
            "id": user.id,
            "username": user.username,
            "role": user.role,
        },
    })))
}

/// Always succeeds; a presented valid token is revoked.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    MaybeUser(claims): MaybeUser,
) -> AppResult<Json<Value>> {
    if let Some(claims) = claims {
        state.revoked.revoke(&claims);
        tracing::info!(user = %claims.username, "User logged out");
    }
    Ok(Json(json!({"success": true, "message": "You have been logged out."})))
}

pub async fn me(AuthUser(claims): AuthUser) -> AppResult<Json<Value>> {
    Ok(Json(json!({
        "id": claims.sub,
        "username": claims.username,
        "role": claims.role,
        "is_support": claims.is_support(),
        "expires_at": claims.exp,
    })))
}
