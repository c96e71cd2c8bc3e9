use std::fmt;
use std::str::FromStr;

use mediqueue_forms::{FormState, ValidationRule, ValidationSchema};

use super::{AdminEntity, EntityError, EntityId, contains_lower, text_field};

/// Specialities offered in the doctor form.
pub const SPECIALITIES: &[&str] = &[
    "Cardiology",
    "Pediatrics",
    "Surgery",
    "Neurology",
    "Dermatology",
    "Orthopedics",
    "Gynecology",
    "Psychiatry",
    "Radiology",
    "Anesthesiology",
];

/// Hospital departments.
pub const DEPARTMENTS: &[&str] = &[
    "Emergency",
    "Cardiology",
    "Pediatrics",
    "Surgery",
    "Neurology",
    "Dermatology",
    "Orthopedics",
    "Gynecology",
    "Psychiatry",
    "Radiology",
];

pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const SPECIALITY: &str = "speciality";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const DEPARTMENT: &str = "department";
    pub const STATUS: &str = "status";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DoctorStatus {
    #[default]
    Active,
    Inactive,
}

impl DoctorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DoctorStatus {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(EntityError::InvalidValue {
                field: fields::STATUS,
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub speciality: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub status: DoctorStatus,
}

/// A doctor without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDraft {
    pub first_name: String,
    pub last_name: String,
    pub speciality: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub status: DoctorStatus,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl AdminEntity for Doctor {
    const KIND: &'static str = "doctor";
    const LABEL: &'static str = "Doctor";

    type Draft = DoctorDraft;

    fn id(&self) -> EntityId {
        self.id
    }

    fn schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(fields::FIRST_NAME, ValidationRule::required().with_min_length(2))
            .field(fields::LAST_NAME, ValidationRule::required().with_min_length(2))
            .field(fields::SPECIALITY, ValidationRule::required())
            .field(fields::EMAIL, ValidationRule::required().with_email())
            .field(fields::PHONE, ValidationRule::required().with_min_length(10))
            .field(fields::DEPARTMENT, ValidationRule::required())
            .field(fields::STATUS, ValidationRule::required())
    }

    fn initial_values(existing: Option<&Self>) -> FormState {
        match existing {
            Some(doctor) => FormState::new()
                .with(fields::FIRST_NAME, &doctor.first_name)
                .with(fields::LAST_NAME, &doctor.last_name)
                .with(fields::SPECIALITY, &doctor.speciality)
                .with(fields::EMAIL, &doctor.email)
                .with(fields::PHONE, &doctor.phone)
                .with(fields::DEPARTMENT, &doctor.department)
                .with(fields::STATUS, doctor.status.as_str()),
            None => FormState::new()
                .with(fields::FIRST_NAME, "")
                .with(fields::LAST_NAME, "")
                .with(fields::SPECIALITY, "")
                .with(fields::EMAIL, "")
                .with(fields::PHONE, "")
                .with(fields::DEPARTMENT, "")
                .with(fields::STATUS, DoctorStatus::default().as_str()),
        }
    }

    fn draft_from(values: &FormState) -> Result<DoctorDraft, EntityError> {
        Ok(DoctorDraft {
            first_name: text_field(values, fields::FIRST_NAME)?,
            last_name: text_field(values, fields::LAST_NAME)?,
            speciality: text_field(values, fields::SPECIALITY)?,
            email: text_field(values, fields::EMAIL)?,
            phone: text_field(values, fields::PHONE)?,
            department: text_field(values, fields::DEPARTMENT)?,
            status: text_field(values, fields::STATUS)?.parse()?,
        })
    }

    fn from_draft(id: EntityId, draft: DoctorDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            speciality: draft.speciality,
            email: draft.email,
            phone: draft.phone,
            department: draft.department,
            status: draft.status,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.speciality,
            &self.department,
        ]
        .iter()
        .any(|field| contains_lower(field, needle))
    }
}
