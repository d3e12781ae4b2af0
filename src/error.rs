use axum::extract::rejection::JsonRejection;
use thiserror::Error;

use crate::validators::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid username or password")]
    AuthFailed,

    #[error("Please log in to access this page")]
    LoginRequired,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation error: {}", .0.message)]
    Field(ValidationError),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid status '{status}': must be one of open, in_progress, closed")]
    InvalidStatus { ticket_id: i64, status: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Safe page the client should fall back to after this error.
    pub fn redirect(&self) -> Option<String> {
        match self {
            AppError::Validation(_) | AppError::Field(_) => None,
            AppError::DuplicateUsername | AppError::DuplicateEmail => Some("/register".to_string()),
            AppError::AuthFailed | AppError::LoginRequired => Some("/login".to_string()),
            AppError::AccessDenied(_) | AppError::NotFound(_) => Some("/dashboard".to_string()),
            AppError::InvalidStatus { ticket_id, .. } => Some(format!("/ticket/{}", ticket_id)),
            _ => Some("/".to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, message) = match &self {
            AppError::AuthFailed | AppError::LoginRequired => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::AccessDenied(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(_) | AppError::Field(_) | AppError::InvalidStatus { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::DuplicateUsername | AppError::DuplicateEmail => (StatusCode::CONFLICT, self.to_string()),
            _ => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let mut body = json!({ "error": message, "redirect": self.redirect() });
        if let AppError::Field(field_err) = &self {
            body["field"] = json!(field_err.field);
            body["code"] = json!(field_err.code);
            body["suggestion"] = json!(field_err.suggestion);
        }

        (status, Json(body)).into_response()
    }
}

/// Malformed or wrongly typed request bodies are plain validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::AuthFailed.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::LoginRequired.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::AccessDenied("x".into()).into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::NotFound("x".into()).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicateEmail.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(AppError::LoginRequired.redirect().as_deref(), Some("/login"));
        assert_eq!(AppError::AccessDenied("x".into()).redirect().as_deref(), Some("/dashboard"));
        assert_eq!(AppError::DuplicateUsername.redirect().as_deref(), Some("/register"));
        assert_eq!(AppError::Validation("x".into()).redirect(), None);
        let err = AppError::InvalidStatus { ticket_id: 7, status: "done".into() };
        assert_eq!(err.redirect().as_deref(), Some("/ticket/7"));
    }

    #[test]
    fn test_field_error_keeps_field_and_hint() {
        let err = AppError::Field(
            ValidationError::new("T001", "title", "Title cannot be empty").suggest("Add a title"),
        );
        assert_eq!(err.to_string(), "Validation error: Title cannot be empty");
        assert_eq!(err.redirect(), None);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(AppError::AuthFailed.to_string(), "Invalid username or password");
    }
}
