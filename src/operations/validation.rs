use explore_core::{CriterionKind, CONTINENTS, LANGUAGES, TIMEZONES};

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a continent or timezone typed by the user against the picker
/// choices, returning the canonical spelling ("europe" -> "Europe")
pub fn validate_criterion(kind: CriterionKind, input: &str) -> Result<String, ValidationError> {
    let choices = match kind {
        CriterionKind::Continent => CONTINENTS,
        CriterionKind::Timezone => TIMEZONES,
    };
    canonical_choice(kind.label(), choices, input)
}

/// Validate a language label against the language picker choices
pub fn validate_language(input: &str) -> Result<String, ValidationError> {
    canonical_choice("Language", LANGUAGES, input)
}

fn canonical_choice(field: &str, choices: &[&str], input: &str) -> Result<String, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError {
            field: field.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }

    choices
        .iter()
        .find(|choice| choice.to_lowercase() == input.to_lowercase())
        .map(|choice| choice.to_string())
        .ok_or_else(|| ValidationError {
            field: field.to_string(),
            message: format!("'{}' is not one of the available choices", input),
        })
}
