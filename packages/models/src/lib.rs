pub mod registration;

pub mod prelude {
    pub use crate::registration::{AccountType, RegistrationCandidate};
}
