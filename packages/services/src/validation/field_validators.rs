pub struct FieldValidator;

impl FieldValidator {
    /// Basic structural email check: one `@` separating a non-empty local
    /// part from a domain that contains a dot, with no whitespace anywhere.
    pub fn email_format_ok(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && domain.contains('.')
                    && !domain.contains('@')
            }
            None => false,
        }
    }

    pub fn meets_min_length(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    /// Non-blank after trimming; whitespace-only counts as empty.
    pub fn non_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }
}
