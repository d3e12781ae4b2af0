use super::{ValidationError, Validator};

pub const TITLE_MAX: usize = 100;

pub struct TitleValidator;

impl Validator for TitleValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let s = input.trim();

        // T001: Empty title
        if s.is_empty() {
            return Err(ValidationError::new("T001", "title", "Title cannot be empty"));
        }

        // T002: Title too long
        let len = s.chars().count();
        if len > TITLE_MAX {
            return Err(ValidationError::new(
                "T002",
                "title",
                format!("Title exceeds {} characters (got {})", TITLE_MAX, len),
            )
            .suggest("Move the details into the description"));
        }

        Ok(())
    }
}

pub struct DescriptionValidator;

impl Validator for DescriptionValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new("T003", "description", "Description cannot be empty")
                .suggest("Describe the problem you are seeing"));
        }
        Ok(())
    }
}
