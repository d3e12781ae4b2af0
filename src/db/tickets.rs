use chrono::Utc;

use crate::db::models::ticket::{Priority, Ticket, TicketStatus};
use crate::db::DbPool;

const TICKET_SELECT: &str =
    "SELECT t.id, t.title, t.description, t.status, t.priority, t.user_id,
            owner.username AS owner, t.assigned_to, assignee.username AS assignee,
            t.created_at, t.updated_at
     FROM tickets t
     JOIN users owner ON owner.id = t.user_id
     LEFT JOIN users assignee ON assignee.id = t.assigned_to";

pub async fn insert(
    db: &DbPool,
    owner_id: i64,
    title: &str,
    description: &str,
    priority: Priority,
) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO tickets (title, description, status, priority, user_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)"
    )
    .bind(title)
    .bind(description)
    .bind(TicketStatus::Open)
    .bind(priority)
    .bind(owner_id)
    .bind(now)
    .bind(now)
    .execute(db)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find(db: &DbPool, id: i64) -> Result<Option<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(&format!("{TICKET_SELECT} WHERE t.id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn list_all(db: &DbPool) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(&format!("{TICKET_SELECT} ORDER BY t.created_at DESC, t.id DESC"))
        .fetch_all(db)
        .await
}

pub async fn list_by_owner(db: &DbPool, owner_id: i64) -> Result<Vec<Ticket>, sqlx::Error> {
    sqlx::query_as::<_, Ticket>(&format!(
        "{TICKET_SELECT} WHERE t.user_id = ? ORDER BY t.created_at DESC, t.id DESC"
    ))
    .bind(owner_id)
    .fetch_all(db)
    .await
}

/// Returns false when no ticket has this id.
pub async fn set_status(db: &DbPool, id: i64, status: TicketStatus) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE tickets SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Returns false when no ticket has this id.
pub async fn set_assignee(db: &DbPool, id: i64, assignee: Option<i64>) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE tickets SET assigned_to = ?, updated_at = ? WHERE id = ?")
        .bind(assignee)
        .bind(Utc::now())
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
