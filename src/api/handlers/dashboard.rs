use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use crate::api::AppState;
use crate::api::middleware::auth::AuthUser;
use crate::db::models::ticket::TicketStatus;
use crate::error::AppResult;
use crate::tickets;

/// Role-dependent listing: every ticket for support, own tickets for clients.
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> AppResult<Json<Value>> {
    let data = tickets::list_for(&state.db, &claims).await?;

    let count_status = |s: TicketStatus| data.iter().filter(|t| t.status == s).count();
    let summary = json!({
        "open": count_status(TicketStatus::Open),
        "in_progress": count_status(TicketStatus::InProgress),
        "closed": count_status(TicketStatus::Closed),
    });

    let view = if claims.is_support() { "support" } else { "client" };
    let total = data.len();
    Ok(Json(json!({
        "view": view,
        "user": claims.username,
        "summary": summary,
        "data": data,
        "total": total,
    })))
}
