//! Submit handlers returned by [`FormController::handle_submit`].

use crate::controller::FormController;
use crate::state::{ErrorState, FormState};

/// The host event that triggered a submit.
///
/// Hosts with default navigation (an HTML form, say) stop it in
/// `prevent_default`. The unit type is the event used outside such hosts.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

impl SubmitEvent for () {
    fn prevent_default(&mut self) {}
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed and the callback ran.
    Submitted,
    /// At least one field failed; the callback was not called.
    Rejected(ErrorState),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Errors of a rejected attempt, empty for a successful one.
    pub fn errors(&self) -> Option<&ErrorState> {
        match self {
            Self::Submitted => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// A validated submit action bound to one form.
///
/// Each call validates the whole form and invokes the callback with the
/// current values only when nothing failed. Calls are independent: there is
/// no retry or debounce.
pub struct SubmitHandler<F> {
    form: FormController,
    on_valid: F,
}

impl<F> SubmitHandler<F>
where
    F: Fn(&FormState),
{
    pub(crate) fn new(form: FormController, on_valid: F) -> Self {
        Self { form, on_valid }
    }

    /// Submit without a host event.
    pub fn call(&self) -> SubmitOutcome {
        self.call_with(&mut ())
    }

    /// Submit in response to a host event, stopping its default action first.
    pub fn call_with(&self, event: &mut dyn SubmitEvent) -> SubmitOutcome {
        event.prevent_default();
        self.form.submit(|values| (self.on_valid)(values))
    }

    /// The form this handler submits.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Turn the handler into a plain closure for event bindings.
    pub fn into_fn(self) -> impl Fn() -> SubmitOutcome {
        move || self.call()
    }
}

impl<F> std::fmt::Debug for SubmitHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitHandler")
            .field("form", &self.form.id())
            .finish_non_exhaustive()
    }
}
