use regex::Regex;
use std::sync::LazyLock;

use super::{ValidationError, Validator};

pub const USERNAME_MIN: usize = 2;
pub const USERNAME_MAX: usize = 64;
pub const EMAIL_MAX: usize = 120;
pub const PASSWORD_MIN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email regex is valid")
});

pub struct UsernameValidator;

impl Validator for UsernameValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let s = input.trim();

        // A001: Empty username
        if s.is_empty() {
            return Err(ValidationError::new("A001", "username", "Username cannot be empty"));
        }

        // A002: Length bounds
        let len = s.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
            return Err(ValidationError::new(
                "A002",
                "username",
                format!(
                    "Username must be between {} and {} characters (got {})",
                    USERNAME_MIN, USERNAME_MAX, len
                ),
            ));
        }

        // A003: Whitespace inside the name
        if s.chars().any(char::is_whitespace) {
            return Err(ValidationError::new("A003", "username", "Username cannot contain spaces")
                .suggest("Use underscores or hyphens instead"));
        }

        Ok(())
    }
}

pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let s = input.trim();

        if s.is_empty() {
            return Err(ValidationError::new("A004", "email", "Email cannot be empty"));
        }

        if s.len() > EMAIL_MAX {
            return Err(ValidationError::new(
                "A005",
                "email",
                format!("Email exceeds {} characters", EMAIL_MAX),
            ));
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::new("A006", "email", format!("Invalid email address: {}", s))
                .suggest("Use the form name@example.com"));
        }

        Ok(())
    }
}

pub struct PasswordValidator;

impl Validator for PasswordValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.chars().count() < PASSWORD_MIN {
            return Err(ValidationError::new(
                "A007",
                "password",
                format!("Password must be at least {} characters", PASSWORD_MIN),
            ));
        }
        Ok(())
    }
}
