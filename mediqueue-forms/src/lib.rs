//! Validated form state for MediQueue admin forms.
//!
//! A [`FormController`] owns the values and per-field errors of one form
//! instance. Rules are declared once in a [`ValidationSchema`] and evaluated
//! only when the form is submitted (unless a different [`ValidationMode`] is
//! requested).
//!
//! # Example
//!
//! ```ignore
//! use mediqueue_forms::{FormController, FormState, ValidationRule, ValidationSchema};
//!
//! let schema = ValidationSchema::new()
//!     .field("email", ValidationRule::required().with_email());
//! let form = FormController::new(FormState::new().with("email", ""), schema);
//!
//! let submit = form.handle_submit(|values| save(values));
//! submit.call(); // rejected, `form.error("email")` is now set
//!
//! form.handle_change("email", "x@y.com");
//! submit.call(); // `save` runs once
//! ```

mod controller;
mod rule;
mod schema;
mod state;
mod submit;
mod value;

pub use controller::{FormController, FormId, FormOptions, FormSnapshot, ValidationMode};
pub use rule::{RuleViolation, ValidationRule, is_email_shape};
pub use schema::{SchemaError, ValidationSchema};
pub use state::{ErrorState, FormState};
pub use submit::{SubmitEvent, SubmitHandler, SubmitOutcome};
pub use value::FieldValue;
