use super::input_validator::{ValidationErrors, ValidationErrorsExt};

/// A single validation rule: a predicate over the full input, plus the
/// field path and message recorded when the predicate fails.
pub struct ValidationRule<T> {
    pub path: &'static str,
    pub message: &'static str,
    pub passes: fn(&T) -> bool,
}

/// Evaluates every rule against the input and merges the failures into one
/// error mapping. Rules never short-circuit each other; the first failing
/// rule for a field supplies its message.
pub fn evaluate<T>(rules: &[ValidationRule<T>], input: &T) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for rule in rules {
        if !(rule.passes)(input) {
            tracing::debug!(field = rule.path, "validation rule failed");
            errors.add_error(rule.path, rule.message.to_string());
        }
    }

    errors
}
