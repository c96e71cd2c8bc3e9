//! The form controller: values, errors and the submit lifecycle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::rule::RuleViolation;
use crate::schema::ValidationSchema;
use crate::state::{ErrorState, FormState};
use crate::submit::{SubmitHandler, SubmitOutcome};
use crate::value::FieldValue;

/// Unique identifier for a form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(usize);

impl FormId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__form_{}", self.0)
    }
}

/// When field rules run outside of a submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only a submit attempt validates (default).
    #[default]
    OnSubmit,
    /// Every change re-validates the changed field.
    OnChange,
    /// [`FormController::handle_blur`] re-validates the blurred field.
    OnBlur,
}

/// Per-form behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub validate_mode: ValidationMode,
}

/// Point-in-time copy of a form's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub values: FormState,
    pub errors: ErrorState,
    pub submit_count: usize,
    pub is_dirty: bool,
}

#[derive(Debug)]
struct FormInner {
    /// Current values
    values: FormState,
    /// Values the form was last seeded with
    initial: FormState,
    /// Result of the last validation
    errors: ErrorState,
    submit_count: usize,
}

impl FormInner {
    fn revalidate_field(&mut self, schema: &ValidationSchema, field: &str) -> Result<(), RuleViolation> {
        let result = schema.check_field(field, &self.values);
        match result {
            Ok(()) => self.errors.remove(field),
            Err(violation) => self.errors.insert(field, violation.to_string()),
        }
        result
    }
}

/// Single source of truth for one form's values and validity.
///
/// A controller is created per editing session, seeded with the initial
/// values, and dropped when the session ends. Cloning is cheap and every
/// clone shares the same state, so input bindings and submit handlers can
/// each hold one.
///
/// Rules run against the whole form on every submit attempt. Changing a
/// value never touches the error map unless a non-default
/// [`ValidationMode`] is selected.
#[derive(Debug, Clone)]
pub struct FormController {
    id: FormId,
    schema: Arc<ValidationSchema>,
    options: FormOptions,
    inner: Arc<RwLock<FormInner>>,
}

impl FormController {
    /// Create a controller with `values == initial_values` and no errors.
    pub fn new(initial_values: FormState, schema: ValidationSchema) -> Self {
        Self::with_options(initial_values, schema, FormOptions::default())
    }

    pub fn with_options(
        initial_values: FormState,
        schema: ValidationSchema,
        options: FormOptions,
    ) -> Self {
        let id = FormId::new();
        debug!(
            "Creating form {} with {} fields, {} rules ({:?})",
            id,
            initial_values.len(),
            schema.len(),
            options.validate_mode
        );
        Self {
            id,
            schema: Arc::new(schema),
            options,
            inner: Arc::new(RwLock::new(FormInner {
                values: initial_values.clone(),
                initial: initial_values,
                errors: ErrorState::new(),
                submit_count: 0,
            })),
        }
    }

    pub fn id(&self) -> FormId {
        self.id
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    fn read(&self) -> RwLockReadGuard<'_, FormInner> {
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, FormInner> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current values of every field.
    pub fn values(&self) -> FormState {
        self.read().values.clone()
    }

    pub fn value(&self, field: &str) -> Option<FieldValue> {
        self.read().values.get(field).cloned()
    }

    /// Errors from the most recent validation.
    pub fn errors(&self) -> ErrorState {
        self.read().errors.clone()
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.read().errors.get(field).map(str::to_string)
    }

    pub fn has_errors(&self) -> bool {
        !self.read().errors.is_empty()
    }

    /// Whether any value differs from what the form was seeded with.
    pub fn is_dirty(&self) -> bool {
        let guard = self.read();
        guard.values != guard.initial
    }

    /// Number of submit attempts since the form was seeded.
    pub fn submit_count(&self) -> usize {
        self.read().submit_count
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let guard = self.read();
        FormSnapshot {
            values: guard.values.clone(),
            errors: guard.errors.clone(),
            submit_count: guard.submit_count,
            is_dirty: guard.values != guard.initial,
        }
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Store a value typed into a text input.
    pub fn handle_change(&self, field: &str, raw: impl Into<String>) {
        self.update_field(field, FieldValue::Text(raw.into()));
    }

    /// Store a value picked from a discrete input (select, switch, radio).
    pub fn set_field_value(&self, field: &str, value: impl Into<FieldValue>) {
        self.update_field(field, value.into());
    }

    fn update_field(&self, field: &str, value: FieldValue) {
        trace!("Form {}: {} = {:?}", self.id, field, value);
        let mut guard = self.write();
        guard.values.set(field, value);
        if self.options.validate_mode == ValidationMode::OnChange {
            let _ = guard.revalidate_field(&self.schema, field);
        }
    }

    /// Notify the form that a field lost focus. Only validates in
    /// [`ValidationMode::OnBlur`].
    pub fn handle_blur(&self, field: &str) {
        if self.options.validate_mode == ValidationMode::OnBlur {
            let _ = self.validate_field(field);
        }
    }

    /// Replace every value (e.g. when the form switches to another record)
    /// and clear all errors.
    pub fn reset(&self, new_values: FormState) {
        debug!("Resetting form {} with {} fields", self.id, new_values.len());
        let mut guard = self.write();
        guard.values = new_values.clone();
        guard.initial = new_values;
        guard.errors = ErrorState::new();
        guard.submit_count = 0;
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Re-check a single field, updating only its entry in the error map.
    pub fn validate_field(&self, field: &str) -> Result<(), RuleViolation> {
        self.write().revalidate_field(&self.schema, field)
    }

    /// Run every rule against the current values. The result replaces the
    /// stored errors and is returned.
    pub fn validate(&self) -> ErrorState {
        let mut guard = self.write();
        let errors = self.schema.validate(&guard.values);
        debug!("Validated form {}: {} invalid field(s)", self.id, errors.len());
        guard.errors = errors.clone();
        errors
    }

    /// Validate and, when nothing failed, hand the current values to
    /// `on_valid`.
    ///
    /// The callback runs after the form's lock is released, so it may call
    /// back into this controller.
    pub fn submit<F>(&self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(&FormState),
    {
        let (errors, values) = {
            let mut guard = self.write();
            guard.submit_count += 1;
            let errors = self.schema.validate(&guard.values);
            guard.errors = errors.clone();
            (errors, guard.values.clone())
        };

        if errors.is_empty() {
            debug!("Form {} submitted", self.id);
            on_valid(&values);
            SubmitOutcome::Submitted
        } else {
            debug!(
                "Form {} rejected: {}",
                self.id,
                errors.fields().collect::<Vec<_>>().join(", ")
            );
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Wrap `on_valid` in a handler suitable for a form's submit binding.
    pub fn handle_submit<F>(&self, on_valid: F) -> SubmitHandler<F>
    where
        F: Fn(&FormState),
    {
        SubmitHandler::new(self.clone(), on_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ValidationRule;

    fn bed_form(options: FormOptions) -> FormController {
        let schema = ValidationSchema::new()
            .field("number", ValidationRule::required().with_min_length(3))
            .field("room", ValidationRule::required().with_min_length(3));
        let values = FormState::new().with("number", "").with("room", "Room 101");
        FormController::with_options(values, schema, options)
    }

    #[test]
    fn test_ids_are_unique() {
        let a = bed_form(FormOptions::default());
        let b = bed_form(FormOptions::default());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_on_change_mode_validates_changed_field_only() {
        let form = bed_form(FormOptions {
            validate_mode: ValidationMode::OnChange,
        });
        form.handle_change("room", "R1");
        assert_eq!(form.error("room").as_deref(), Some("Must be at least 3 characters."));
        assert!(form.error("number").is_none());

        form.handle_change("room", "R101");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_on_blur_mode() {
        let form = bed_form(FormOptions {
            validate_mode: ValidationMode::OnBlur,
        });
        form.handle_change("number", "B1");
        assert!(!form.has_errors());

        form.handle_blur("number");
        assert!(form.error("number").is_some());
        assert!(form.error("room").is_none());
    }

    #[test]
    fn test_blur_is_ignored_in_default_mode() {
        let form = bed_form(FormOptions::default());
        form.handle_blur("number");
        assert!(!form.has_errors());
    }

    #[test]
    fn test_submit_count_and_reset() {
        let form = bed_form(FormOptions::default());
        form.submit(|_| {});
        form.submit(|_| {});
        assert_eq!(form.submit_count(), 2);

        form.reset(FormState::new().with("number", "B002").with("room", "Room 102"));
        assert_eq!(form.submit_count(), 0);
        assert!(!form.has_errors());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_callback_may_reenter_controller() {
        let form = bed_form(FormOptions::default());
        form.handle_change("number", "B001");
        let outcome = form.submit(|values| {
            assert_eq!(values.text("number").as_deref(), Some("B001"));
            form.reset(FormState::new().with("number", "").with("room", ""));
        });
        assert!(outcome.is_submitted());
        assert_eq!(form.value("number"), Some(FieldValue::from("")));
    }
}
