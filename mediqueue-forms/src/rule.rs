//! Declarative constraints for a single field.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// `local@domain.tld`, nothing stricter.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

/// Check that a value looks like an email address.
pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Why a field failed validation.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("This field is required.")]
    Required,
    #[error("Must be at least {min} characters.")]
    MinLength { min: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Constraints for one field.
///
/// Rules are checked in a fixed order (`required`, then `min_length`, then
/// `is_email`) and the first failure is the only one reported. `min_length`
/// and `is_email` never fail an empty value; emptiness is `required`'s job.
///
/// Deserializes from `{"required": true, "minLength": 3, "isEmail": false}`
/// with every key optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValidationRule {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    pub is_email: bool,
}

impl ValidationRule {
    /// No constraints.
    pub const fn optional() -> Self {
        Self {
            required: false,
            min_length: None,
            is_email: false,
        }
    }

    /// Value must be non-empty after trimming.
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            is_email: false,
        }
    }

    /// Require at least `min` characters.
    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Require an email-shaped value.
    pub const fn with_email(mut self) -> Self {
        self.is_email = true;
        self
    }

    /// Check a field value against this rule. An absent value is treated as
    /// the empty string.
    pub fn check(&self, value: Option<&FieldValue>) -> Result<(), RuleViolation> {
        let text = value.map(FieldValue::as_text).unwrap_or(Cow::Borrowed(""));

        if self.required && text.trim().is_empty() {
            return Err(RuleViolation::Required);
        }
        if text.is_empty() {
            return Ok(());
        }
        if let Some(min) = self.min_length
            && text.chars().count() < min
        {
            return Err(RuleViolation::MinLength { min });
        }
        if self.is_email && !is_email_shape(&text) {
            return Err(RuleViolation::InvalidEmail);
        }
        Ok(())
    }
}
