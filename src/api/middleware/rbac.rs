use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::sync::Arc;
use crate::auth::jwt::Claims;
use crate::auth::rbac::is_support;
use crate::error::AppError;
use crate::api::AppState;
use super::auth::AuthUser;

/// Axum extractor that requires the caller to have the `support` role.
/// Anonymous callers get 401, clients get 403.
pub struct SupportUser(pub Claims);

impl FromRequestParts<Arc<AppState>> for SupportUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        if is_support(claims.role) {
            Ok(SupportUser(claims))
        } else {
            tracing::warn!(user = %claims.username, "Support-only route denied");
            Err(AppError::AccessDenied("Support role required".to_string()))
        }
    }
}
