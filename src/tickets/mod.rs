//! Ticket lifecycle: submission, listing, access-checked viewing and the
//! support-only mutations (status changes, assignment).
//!
//! Status transitions are unrestricted: any status may move to any other,
//! including reopening a closed ticket.

use crate::auth::jwt::Claims;
use crate::auth::rbac::{has_permission, Permission};
use crate::db::models::ticket::{Priority, Ticket, TicketStatus};
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::validators::{DescriptionValidator, TitleValidator, Validator};

pub async fn submit(
    db: &DbPool,
    owner: &Claims,
    title: &str,
    description: &str,
    priority: Option<&str>,
) -> AppResult<Ticket> {
    if !has_permission(owner.role, &Permission::SubmitTicket) {
        return Err(AppError::AccessDenied("Cannot submit tickets".to_string()));
    }

    let title = title.trim();
    let description = description.trim();
    TitleValidator.validate(title)?;
    DescriptionValidator.validate(description)?;
    let priority = Priority::parse_or_default(priority);

    let id = db::tickets::insert(db, owner.sub, title, description, priority).await?;
    tracing::info!(ticket_id = id, owner = %owner.username, priority = priority.as_str(), "Ticket submitted");

    db::tickets::find(db, id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Ticket {} vanished after insert", id)))
}

/// Support sees every ticket; everyone else only their own.
pub async fn list_for(db: &DbPool, user: &Claims) -> AppResult<Vec<Ticket>> {
    let tickets = if has_permission(user.role, &Permission::ViewAllTickets) {
        db::tickets::list_all(db).await?
    } else {
        db::tickets::list_by_owner(db, user.sub).await?
    };
    Ok(tickets)
}

pub async fn view(db: &DbPool, user: &Claims, ticket_id: i64) -> AppResult<Ticket> {
    let ticket = db::tickets::find(db, ticket_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", ticket_id)))?;

    if ticket.user_id != user.sub && !has_permission(user.role, &Permission::ViewAllTickets) {
        tracing::warn!(ticket_id, user = %user.username, "Ticket view denied");
        return Err(AppError::AccessDenied("You can only view your own tickets".to_string()));
    }

    Ok(ticket)
}

pub async fn update_status(
    db: &DbPool,
    user: &Claims,
    ticket_id: i64,
    new_status: &str,
) -> AppResult<Ticket> {
    if !has_permission(user.role, &Permission::UpdateTicketStatus) {
        tracing::warn!(ticket_id, user = %user.username, "Status update denied");
        return Err(AppError::AccessDenied("Support role required".to_string()));
    }

    let status: TicketStatus = new_status.parse().map_err(|_| AppError::InvalidStatus {
        ticket_id,
        status: new_status.to_string(),
    })?;

    if !db::tickets::set_status(db, ticket_id, status).await? {
        return Err(AppError::NotFound(format!("Ticket {} not found", ticket_id)));
    }
    tracing::info!(ticket_id, status = status.as_str(), by = %user.username, "Ticket status updated");

    view(db, user, ticket_id).await
}

/// `assignee = None` clears the assignment.
pub async fn assign(
    db: &DbPool,
    user: &Claims,
    ticket_id: i64,
    assignee: Option<i64>,
) -> AppResult<Ticket> {
    if !has_permission(user.role, &Permission::AssignTicket) {
        return Err(AppError::AccessDenied("Support role required".to_string()));
    }

    if let Some(assignee_id) = assignee {
        let target = db::users::find_by_id(db, assignee_id).await?;
        if !target.is_some_and(|u| u.is_support()) {
            return Err(AppError::Validation(format!(
                "User {} is not a support user",
                assignee_id
            )));
        }
    }

    if !db::tickets::set_assignee(db, ticket_id, assignee).await? {
        return Err(AppError::NotFound(format!("Ticket {} not found", ticket_id)));
    }
    tracing::info!(ticket_id, assignee = ?assignee, by = %user.username, "Ticket assignment updated");

    view(db, user, ticket_id).await
}
