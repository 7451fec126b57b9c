use models::registration::{AccountType, RegistrationCandidate};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors};
use crate::validation::rules::{evaluate, ValidationRule};

pub const MIN_PASSWORD_LENGTH: usize = 3;

/// The registration rule set, in schema order: base field checks first,
/// then the cross-field refinements. Every rule sees the full candidate,
/// so base and cross-field failures are reported together in one pass.
///
/// The company-name rule applies whenever the account type is `Company`,
/// whether or not a consumer ever rendered the field.
pub const REGISTRATION_RULES: &[ValidationRule<RegistrationCandidate>] = &[
    ValidationRule {
        path: "email",
        message: "Email format is invalid",
        passes: |candidate| FieldValidator::email_format_ok(&candidate.email),
    },
    ValidationRule {
        path: "password",
        message: "Password must be at least 3 characters long",
        passes: |candidate| {
            FieldValidator::meets_min_length(&candidate.password, MIN_PASSWORD_LENGTH)
        },
    },
    ValidationRule {
        path: "confirmPassword",
        message: "Passwords don't match",
        passes: |candidate| candidate.password == candidate.confirm_password,
    },
    ValidationRule {
        path: "companyName",
        message: "Company name is required",
        passes: |candidate| {
            candidate.account_type != AccountType::Company
                || FieldValidator::non_empty(&candidate.company_name)
        },
    },
];

impl InputValidator for RegistrationCandidate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = evaluate(REGISTRATION_RULES, self);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
