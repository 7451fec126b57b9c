use models::registration::{AccountType, RegistrationCandidate};
use services::validation::{InputValidator, ValidationErrors};

/// Caller-supplied sink for a successfully validated registration.
pub trait SubmitHandler {
    fn on_submit(&self, values: &RegistrationCandidate);
}

/// Submit handler that only logs the submitted record. Useful while no
/// real registration backend is wired up.
pub struct LoggingSubmitHandler;

impl SubmitHandler for LoggingSubmitHandler {
    fn on_submit(&self, values: &RegistrationCandidate) {
        match serde_json::to_string(values) {
            Ok(json) => tracing::info!(values = %json, "registration submitted"),
            Err(e) => tracing::warn!(error = %e, "failed to serialize submitted values"),
        }
    }
}

/// Registration form state: current field values plus the error mapping
/// surfaced to the presentation layer.
///
/// Initial values match the form defaults: empty text fields and a
/// pre-selected `Personal` account type.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    values: RegistrationCandidate,
    errors: ValidationErrors,
    submitted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &RegistrationCandidate {
        &self.values
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.values.password = password.into();
        self.revalidate();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.values.confirm_password = confirm_password.into();
        self.revalidate();
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.values.account_type = account_type;
        self.revalidate();
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) {
        self.values.company_name = company_name.into();
        self.revalidate();
    }

    /// Whether the company-name input should be presented. Derived from the
    /// current account type on every call; validation applies the company
    /// rule regardless of whether the field was ever shown.
    pub fn show_company_name(&self) -> bool {
        self.values.account_type == AccountType::Company
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Validates the current values. On success the validated record is
    /// handed to the submit handler and any stale errors are cleared; on
    /// failure the full error mapping is kept for display and the handler
    /// is never invoked.
    pub fn submit(&mut self, handler: &dyn SubmitHandler) -> bool {
        self.submitted = true;

        match self.values.validate() {
            Ok(()) => {
                self.errors.clear();
                handler.on_submit(&self.values);
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    // Displayed errors track edits only once a submit has been attempted.
    fn revalidate(&mut self) {
        if !self.submitted {
            return;
        }

        self.errors = self.values.validate().err().unwrap_or_default();
    }
}
