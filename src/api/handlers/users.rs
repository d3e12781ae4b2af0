use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::middleware::rbac::SupportUser;
use crate::api::AppState;
use crate::error::AppResult;

/// Support users available as ticket assignees.
pub async fn support_staff(
    State(state): State<Arc<AppState>>,
    _support: SupportUser,
) -> AppResult<Json<Value>> {
    let data = crate::db::users::list_support(&state.db).await?;
    let count = data.len();
    Ok(Json(json!({ "data": data, "total": count })))
}
