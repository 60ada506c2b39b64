//! Field validators
//!
//! Pure functions over field text. A validator returns a [`FieldState`] for
//! one field; a form collects those into a [`ValidationResult`], which the
//! form then binds onto its field slots.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Loose `local@domain.tld` shape: one `@`, no whitespace, a dot after the `@`.
/// Not RFC 5322; inputs like `a@b.c` pass and that is accepted behavior.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Reason a field failed validation. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter {purpose}")]
    Missing { purpose: String },
    #[error("Please enter {purpose}")]
    InvalidEmail { purpose: String },
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    #[allow(dead_code)] // no view shows the raw or normalized text yet
    pub raw: String,
    #[allow(dead_code)]
    pub trimmed: String,
    pub valid: bool,
    pub error: Option<String>,
}

impl FieldState {
    fn accepted(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            trimmed: raw.trim().to_string(),
            valid: true,
            error: None,
        }
    }

    fn rejected(raw: &str, error: FieldError) -> Self {
        Self {
            raw: raw.to_string(),
            trimmed: raw.trim().to_string(),
            valid: false,
            error: Some(error.to_string()),
        }
    }
}

/// Aggregate of one validation pass over a whole form.
/// Only invalid fields appear in `field_errors`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub field_errors: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Collect per-field states keyed by field name
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a FieldState)>) -> Self {
        let field_errors = fields
            .into_iter()
            .filter(|(_, state)| !state.valid)
            .map(|(name, state)| (name.to_string(), state.error.clone().unwrap_or_default()))
            .collect();
        Self { field_errors }
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

/// Required-text rule: fails when the trimmed text is empty
pub fn validate_required(text: &str, purpose: &str) -> FieldState {
    if text.trim().is_empty() {
        FieldState::rejected(
            text,
            FieldError::Missing {
                purpose: purpose.to_string(),
            },
        )
    } else {
        FieldState::accepted(text)
    }
}

/// Email rule: fails when empty (`purpose`) or not email shaped (`valid_purpose`)
pub fn validate_email(text: &str, purpose: &str, valid_purpose: &str) -> FieldState {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        FieldState::rejected(
            text,
            FieldError::Missing {
                purpose: purpose.to_string(),
            },
        )
    } else if !is_email_shaped(trimmed) {
        FieldState::rejected(
            text,
            FieldError::InvalidEmail {
                purpose: valid_purpose.to_string(),
            },
        )
    } else {
        FieldState::accepted(text)
    }
}

/// Raw shape test, without trimming
pub fn is_email_shaped(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text)
}
