use chrono::Utc;

use crate::db::models::user::{Role, StaffMember, User};
use crate::db::DbPool;

const USER_COLUMNS: &str = "id, username, email, password, role, created_at";

pub async fn insert(
    db: &DbPool,
    username: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO users (username, email, password, role, created_at)
         VALUES (?, ?, ?, ?, ?)"
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .execute(db)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        username: username.to_string(),
        email: email.to_string(),
        password: password_hash.to_string(),
        role,
        created_at: now,
    })
}

pub async fn find_by_id(db: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_by_username(db: &DbPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?"))
        .bind(username)
        .fetch_optional(db)
        .await
}

pub async fn username_exists(db: &DbPool, username: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(db)
        .await?;
    Ok(count > 0)
}

pub async fn email_exists(db: &DbPool, email: &str) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email)
        .fetch_one(db)
        .await?;
    Ok(count > 0)
}

pub async fn list_support(db: &DbPool) -> Result<Vec<StaffMember>, sqlx::Error> {
    sqlx::query_as::<_, StaffMember>(
        "SELECT id, username FROM users WHERE role = 'support' ORDER BY username ASC"
    )
    .fetch_all(db)
    .await
}
