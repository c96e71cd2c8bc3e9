use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use mediqueue_forms::{FormState, ValidationRule, ValidationSchema};

use super::{AdminEntity, EntityError, EntityId, contains_lower, optional_text, text_field};

/// Bed types offered in the bed form.
pub const BED_TYPES: &[&str] = &[
    "Standard",
    "Intensive Care",
    "Resuscitation",
    "Pediatric",
    "Maternity",
    "Surgical",
    "Emergency",
];

/// Admission dates travel through the form as `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

pub mod fields {
    pub const NUMBER: &str = "number";
    pub const ROOM: &str = "room";
    pub const DEPARTMENT: &str = "department";
    pub const TYPE: &str = "type";
    pub const STATUS: &str = "status";
    pub const PATIENT_NAME: &str = "patientName";
    pub const ADMISSION_DATE: &str = "admissionDate";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BedStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl BedStatus {
    pub const ALL: [BedStatus; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Reserved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Reserved => "reserved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Under Maintenance",
            Self::Reserved => "Reserved",
        }
    }

    /// Occupied and reserved beds carry patient details.
    pub fn holds_patient(self) -> bool {
        matches!(self, Self::Occupied | Self::Reserved)
    }
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BedStatus {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| EntityError::InvalidValue {
                field: fields::STATUS,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bed {
    pub id: EntityId,
    pub number: String,
    pub room: String,
    pub department: String,
    pub bed_type: String,
    pub status: BedStatus,
    pub patient_name: Option<String>,
    pub admission_date: Option<NaiveDate>,
}

/// A bed without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedDraft {
    pub number: String,
    pub room: String,
    pub department: String,
    pub bed_type: String,
    pub status: BedStatus,
    pub patient_name: Option<String>,
    pub admission_date: Option<NaiveDate>,
}

impl AdminEntity for Bed {
    const KIND: &'static str = "bed";
    const LABEL: &'static str = "Bed";

    type Draft = BedDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(fields::NUMBER, ValidationRule::required().with_min_length(3))
            .field(fields::ROOM, ValidationRule::required().with_min_length(3))
            .field(fields::DEPARTMENT, ValidationRule::required())
            .field(fields::TYPE, ValidationRule::required())
            .field(fields::STATUS, ValidationRule::required())
    }

    fn initial_values(existing: Option<&Self>) -> FormState {
        let Some(bed) = existing else {
            return FormState::new()
                .with(fields::NUMBER, "")
                .with(fields::ROOM, "")
                .with(fields::DEPARTMENT, "")
                .with(fields::TYPE, "")
                .with(fields::STATUS, BedStatus::default().as_str())
                .with(fields::PATIENT_NAME, "")
                .with(fields::ADMISSION_DATE, "");
        };
        let admission_date = bed
            .admission_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        FormState::new()
            .with(fields::NUMBER, &bed.number)
            .with(fields::ROOM, &bed.room)
            .with(fields::DEPARTMENT, &bed.department)
            .with(fields::TYPE, &bed.bed_type)
            .with(fields::STATUS, bed.status.as_str())
            .with(fields::PATIENT_NAME, bed.patient_name.clone().unwrap_or_default())
            .with(fields::ADMISSION_DATE, admission_date)
    }

    fn draft_from(values: &FormState) -> Result<BedDraft, EntityError> {
        let status: BedStatus = text_field(values, fields::STATUS)?.parse()?;

        // Patient details are only shown, and only kept, for beds in use.
        let (patient_name, admission_date) = if status.holds_patient() {
            let admission_date = optional_text(values, fields::ADMISSION_DATE)
                .map(|value| {
                    NaiveDate::parse_from_str(&value, DATE_FORMAT)
                        .map_err(|source| EntityError::InvalidDate { value, source })
                })
                .transpose()?;
            (optional_text(values, fields::PATIENT_NAME), admission_date)
        } else {
            (None, None)
        };

        Ok(BedDraft {
            number: text_field(values, fields::NUMBER)?,
            room: text_field(values, fields::ROOM)?,
            department: text_field(values, fields::DEPARTMENT)?,
            bed_type: text_field(values, fields::TYPE)?,
            status,
            patient_name,
            admission_date,
        })
    }

    fn from_draft(id: EntityId, draft: BedDraft) -> Self {
        Self {
            id,
            number: draft.number,
            room: draft.room,
            department: draft.department,
            bed_type: draft.bed_type,
            status: draft.status,
            patient_name: draft.patient_name,
            admission_date: draft.admission_date,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.number, &self.room, &self.department, &self.bed_type]
            .iter()
            .any(|field| contains_lower(field, needle))
            || self
                .patient_name
                .as_deref()
                .is_some_and(|name| contains_lower(name, needle))
    }
}
