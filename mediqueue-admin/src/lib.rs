//! Hospital administration: doctors, beds and the forms that edit them.
//!
//! Every add/edit dialog is an [`EditingSession`] backed by a
//! [`mediqueue_forms::FormController`]; records live in an injected
//! [`Repository`].

pub mod config;
pub mod entity;
pub mod error;
pub mod manager;
pub mod paths;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;

pub use config::{AdminConfig, HospitalSettings};
pub use entity::{
    AdminEntity, Bed, BedDraft, BedStatus, Doctor, DoctorDraft, DoctorStatus, EntityError, EntityId,
};
pub use error::AdminError;
pub use manager::EntityManager;
pub use session::{EditingSession, SessionMode, SessionOutcome};
pub use stats::BedStats;
pub use store::{InMemoryRepository, Repository, StoreError};
