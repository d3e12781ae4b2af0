//! Account registration and credential checks.

use crate::auth::password;
use crate::db::models::user::{RegisterRequest, Role, User};
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::validators::{EmailValidator, PasswordValidator, UsernameValidator, Validator};

pub async fn register(db: &DbPool, req: RegisterRequest) -> AppResult<User> {
    let username = req.username.trim().to_string();
    let email = req.email.trim().to_lowercase();

    UsernameValidator.validate(&username)?;
    EmailValidator.validate(&email)?;
    PasswordValidator.validate(&req.password)?;

    if let Some(confirm) = &req.confirm_password {
        if *confirm != req.password {
            return Err(AppError::Validation("Passwords must match".to_string()));
        }
    }

    let role = match req.role.as_deref().map(str::trim) {
        None | Some("") => Role::default(),
        Some(raw) => raw.parse::<Role>().map_err(AppError::Validation)?,
    };

    if db::users::username_exists(db, &username).await? {
        return Err(AppError::DuplicateUsername);
    }
    if db::users::email_exists(db, &email).await? {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = password::hash(&req.password)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    // UNIQUE constraints catch registrations that race past the checks above.
    let user = db::users::insert(db, &username, &email, &password_hash, role)
        .await
        .map_err(|e| {
            if db::is_unique_violation(&e, "users.username") {
                AppError::DuplicateUsername
            } else if db::is_unique_violation(&e, "users.email") {
                AppError::DuplicateEmail
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(user_id = user.id, username = %user.username, role = %user.role, "User registered");
    Ok(user)
}

/// Unknown usernames and wrong passwords fail identically.
pub async fn login(db: &DbPool, username: &str, password: &str) -> AppResult<User> {
    let Some(user) = db::users::find_by_username(db, username.trim()).await? else {
        password::verify_dummy(password);
        tracing::warn!(username = %username, "Login failed: unknown user");
        return Err(AppError::AuthFailed);
    };

    if !password::verify(password, &user.password) {
        tracing::warn!(username = %username, "Login failed: bad password");
        return Err(AppError::AuthFailed);
    }

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(user)
}
