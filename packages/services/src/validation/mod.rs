pub mod field_validators;
pub mod input_validator;
pub mod models;
pub mod rules;

// Re-export common types and functions
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
pub use rules::{evaluate, ValidationRule};
