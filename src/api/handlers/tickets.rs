use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::middleware::auth::AuthUser;
use crate::api::middleware::json::ValidJson;
use crate::api::middleware::rbac::SupportUser;
use crate::api::AppState;
use crate::db::models::ticket::{AssignTicketRequest, SubmitTicketRequest, UpdateStatusRequest};
use crate::error::AppResult;
use crate::tickets;

pub async fn submit(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    ValidJson(body): ValidJson<SubmitTicketRequest>,
) -> AppResult<Json<Value>> {
    let ticket = tickets::submit(
        &state.db,
        &claims,
        &body.title,
        &body.description,
        body.priority_text().as_deref(),
    )
    .await?;

    Ok(Json(json!({
        "ticket": ticket,
        "message": "Ticket submitted successfully!",
    })))
}

pub async fn view(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let ticket = tickets::view(&state.db, &claims, id).await?;
    Ok(Json(json!({
        "ticket": ticket,
        "can_update": claims.is_support(),
    })))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    SupportUser(claims): SupportUser,
    Path(id): Path<i64>,
    ValidJson(body): ValidJson<UpdateStatusRequest>,
) -> AppResult<Json<Value>> {
    let ticket = tickets::update_status(&state.db, &claims, id, &body.status_text()).await?;
    Ok(Json(json!({
        "ticket": ticket,
        "message": "Ticket updated successfully!",
    })))
}

pub async fn assign(
    State(state): State<Arc<AppState>>,
    SupportUser(claims): SupportUser,
    Path(id): Path<i64>,
    ValidJson(body): ValidJson<AssignTicketRequest>,
) -> AppResult<Json<Value>> {
    let ticket = tickets::assign(&state.db, &claims, id, body.assignee_id).await?;
    Ok(Json(json!({
        "ticket": ticket,
        "message": "Ticket updated!",
    })))
}
