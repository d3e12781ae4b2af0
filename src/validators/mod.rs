use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub mod account;
pub mod ticket;

pub use account::{EmailValidator, PasswordValidator, UsernameValidator};
pub use ticket::{DescriptionValidator, TitleValidator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub(crate) fn new(code: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: field.to_string(),
            suggestion: None,
        }
    }

    pub(crate) fn suggest(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Field(err)
    }
}

pub trait Validator {
    fn validate(&self, input: &str) -> Result<(), ValidationError>;
}
