//! Per-form rule sets and the validation pass over them.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rule::{RuleViolation, ValidationRule};
use crate::state::{ErrorState, FormState};

/// Errors raised while building a schema from external input.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field '{field}' declares a minLength of 0")]
    ZeroMinLength { field: String },
}

/// Rules for every constrained field of a form.
///
/// Fields without an entry are always valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationSchema {
    rules: BTreeMap<String, ValidationRule>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule registration. A later rule for the same field
    /// replaces the earlier one.
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.insert(name, rule);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: ValidationRule) {
        self.rules.insert(name.into(), rule);
    }

    /// Parse a schema of the form `{"email": {"required": true, "isEmail": true}}`.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        if let Some((field, _)) = schema
            .rules
            .iter()
            .find(|(_, rule)| rule.min_length == Some(0))
        {
            return Err(SchemaError::ZeroMinLength {
                field: field.clone(),
            });
        }
        Ok(schema)
    }

    pub fn rule(&self, field: &str) -> Option<&ValidationRule> {
        self.rules.get(field)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.rule(field).is_some_and(|rule| rule.required)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ValidationRule> {
        self.rules.iter()
    }

    /// Check one field. Unconstrained fields always pass.
    pub fn check_field(&self, field: &str, values: &FormState) -> Result<(), RuleViolation> {
        match self.rules.get(field) {
            Some(rule) => rule.check(values.get(field)),
            None => Ok(()),
        }
    }

    /// Run every rule against `values` and collect one message per failing
    /// field.
    pub fn validate(&self, values: &FormState) -> ErrorState {
        let mut errors = ErrorState::new();
        for (field, rule) in &self.rules {
            if let Err(violation) = rule.check(values.get(field)) {
                errors.insert(field.as_str(), violation.to_string());
            }
        }
        errors
    }
}
