pub mod form;

pub use form::{LoggingSubmitHandler, RegistrationForm, SubmitHandler};
pub use models::registration::{AccountType, RegistrationCandidate};
pub use services::validation::{InputValidator, ValidationErrors};
