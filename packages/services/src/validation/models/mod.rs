pub mod registration_validator;
