//! Records managed from the admin screens.

pub mod bed;
pub mod doctor;

pub use bed::{BED_TYPES, Bed, BedDraft, BedStatus};
pub use doctor::{DEPARTMENTS, Doctor, DoctorDraft, DoctorStatus, SPECIALITIES};

use mediqueue_forms::{FormState, ValidationSchema};
use thiserror::Error;

/// Record identifier, unique per entity kind.
pub type EntityId = u32;

/// Error turning validated form values into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("field '{field}' is missing")]
    MissingField { field: &'static str },
    #[error("'{value}' is not a valid {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error("invalid admission date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A record kind that can be edited through a validated form.
pub trait AdminEntity: Clone + Send + Sync + 'static {
    /// Lowercase name used in messages ("doctor", "bed").
    const KIND: &'static str;

    /// Title-case name used in dialog titles ("Doctor", "Bed").
    const LABEL: &'static str;

    /// The record without its id, as produced by a submitted form.
    type Draft;

    fn id(&self) -> EntityId;

    /// Rules for the entity's form.
    fn schema() -> ValidationSchema;

    /// Form values for a new record (`None`) or for editing `existing`.
    fn initial_values(existing: Option<&Self>) -> FormState;

    /// Convert submitted values. Only called after the schema passed.
    fn draft_from(values: &FormState) -> Result<Self::Draft, EntityError>;

    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Case-insensitive search; `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

/// Trimmed text of a field that must be present.
pub(crate) fn text_field(values: &FormState, field: &'static str) -> Result<String, EntityError> {
    values
        .text(field)
        .map(|text| text.trim().to_string())
        .ok_or(EntityError::MissingField { field })
}

/// Trimmed text of a field, `None` when absent or blank.
pub(crate) fn optional_text(values: &FormState, field: &str) -> Option<String> {
    values
        .text(field)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub(crate) fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
