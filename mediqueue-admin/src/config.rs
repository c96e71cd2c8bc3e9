//! Admin configuration and the hospital settings form.

use std::fs;
use std::path::Path;

use log::{LevelFilter, info};
use mediqueue_forms::{FormController, FormState, ValidationRule, ValidationSchema};
use serde::{Deserialize, Serialize};

use crate::entity::EntityError;
use crate::error::AdminError;
use crate::paths;

pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const CAPACITY: &str = "capacity";
    pub const EMERGENCY_ENABLED: &str = "emergencyEnabled";
}

/// Hospital information shown on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HospitalSettings {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Bed capacity
    pub capacity: u32,
    pub emergency_enabled: bool,
}

impl Default for HospitalSettings {
    fn default() -> Self {
        Self {
            name: "MediQueue General Hospital".to_string(),
            address: "123 Healthcare Ave, Medical City, MC 12345".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "admin@mediqueue.com".to_string(),
            capacity: 150,
            emergency_enabled: true,
        }
    }
}

impl HospitalSettings {
    pub fn schema() -> ValidationSchema {
        ValidationSchema::new()
            .field(fields::NAME, ValidationRule::required().with_min_length(2))
            .field(fields::ADDRESS, ValidationRule::required())
            .field(fields::PHONE, ValidationRule::required().with_min_length(10))
            .field(fields::EMAIL, ValidationRule::required().with_email())
            .field(fields::CAPACITY, ValidationRule::required())
    }

    pub fn form_values(&self) -> FormState {
        FormState::new()
            .with(fields::NAME, &self.name)
            .with(fields::ADDRESS, &self.address)
            .with(fields::PHONE, &self.phone)
            .with(fields::EMAIL, &self.email)
            .with(fields::CAPACITY, self.capacity.to_string())
            .with(fields::EMERGENCY_ENABLED, self.emergency_enabled)
    }

    /// A settings form seeded with the current values.
    pub fn form(&self) -> FormController {
        FormController::new(self.form_values(), Self::schema())
    }

    /// Read settings back from submitted values.
    pub fn from_form(values: &FormState) -> Result<Self, EntityError> {
        let text = |field: &'static str| {
            values
                .text(field)
                .map(|text| text.trim().to_string())
                .ok_or(EntityError::MissingField { field })
        };
        let capacity = text(fields::CAPACITY)?;
        Ok(Self {
            name: text(fields::NAME)?,
            address: text(fields::ADDRESS)?,
            phone: text(fields::PHONE)?,
            email: text(fields::EMAIL)?,
            capacity: capacity.parse().map_err(|_| EntityError::InvalidValue {
                field: fields::CAPACITY,
                value: capacity.clone(),
            })?,
            emergency_enabled: values
                .get(fields::EMERGENCY_ENABLED)
                .and_then(|value| value.as_bool())
                .unwrap_or(false),
        })
    }
}

/// Configuration read from `config.json` in the platform config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    pub hospital: HospitalSettings,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            hospital: HospitalSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AdminConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, AdminError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| AdminError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the platform config directory, or defaults when there is none.
    pub fn load_default() -> Result<Self, AdminError> {
        match paths::config_file() {
            Some(path) => {
                let config = Self::load(&path)?;
                info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parsed log level; unrecognised values fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
