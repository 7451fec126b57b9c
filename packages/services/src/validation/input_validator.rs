use std::collections::HashMap;

/// A mapping of field names to the single active error message for that
/// field.
pub type ValidationErrors = HashMap<String, String>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        // Each field carries at most one message; the first rule to fail
        // for a field wins.
        self.entry(field.to_string()).or_insert(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, message) in other {
            self.entry(field).or_insert(message);
        }
    }
}
