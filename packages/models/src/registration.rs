use serde::{Deserialize, Serialize};

/// The kind of account being registered. Company accounts additionally
/// require a company name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Personal,
    Company,
}

/// The in-memory record of current registration form values. Built fresh
/// for every validation pass and never mutated by validation.
///
/// `company_name` is optional text modeled as a possibly-empty string;
/// empty means absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCandidate {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: AccountType,
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidate_is_personal_with_empty_fields() {
        let candidate = RegistrationCandidate::default();

        assert_eq!(candidate.account_type, AccountType::Personal);
        assert!(candidate.email.is_empty());
        assert!(candidate.password.is_empty());
        assert!(candidate.confirm_password.is_empty());
        assert!(candidate.company_name.is_empty());
    }

    #[test]
    fn test_candidate_serializes_with_camel_case_field_names() {
        let candidate = RegistrationCandidate {
            email: "test@example.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            account_type: AccountType::Company,
            company_name: "Acme".to_string(),
        };

        let json = serde_json::to_value(&candidate).unwrap();

        assert_eq!(json["email"], "test@example.com");
        assert_eq!(json["confirmPassword"], "abc");
        assert_eq!(json["accountType"], "company");
        assert_eq!(json["companyName"], "Acme");
    }

    #[test]
    fn test_account_type_round_trips_lowercase() {
        let json = serde_json::to_string(&AccountType::Personal).unwrap();
        assert_eq!(json, "\"personal\"");

        let parsed: AccountType = serde_json::from_str("\"company\"").unwrap();
        assert_eq!(parsed, AccountType::Company);
    }
}
