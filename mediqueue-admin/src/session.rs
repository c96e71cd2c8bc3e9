//! One open add/edit dialog.

use log::debug;
use mediqueue_forms::{ErrorState, FormController, FormState};

use crate::entity::{AdminEntity, EntityId};
use crate::error::AdminError;
use crate::manager::EntityManager;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Add,
    Edit(EntityId),
}

/// Result of submitting a session's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome<E> {
    /// The record was stored; the dialog can close.
    Saved(E),
    /// Some fields failed validation; the dialog stays open.
    Invalid(ErrorState),
}

/// The lifetime of one add/edit dialog.
///
/// Owns exactly one [`FormController`]. Dropping the session discards the
/// form; nothing is kept between sessions.
pub struct EditingSession<E: AdminEntity> {
    mode: SessionMode,
    form: FormController,
    manager: EntityManager<E>,
}

impl<E: AdminEntity> EditingSession<E> {
    pub(crate) fn new(manager: EntityManager<E>, mode: SessionMode, existing: Option<&E>) -> Self {
        let form = FormController::new(E::initial_values(existing), E::schema());
        debug!("Opened {} session {:?} on form {}", E::KIND, mode, form.id());
        Self {
            mode,
            form,
            manager,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The form bound to the dialog's inputs.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn title(&self) -> String {
        match self.mode {
            SessionMode::Add => format!("Add a New {}", E::LABEL),
            SessionMode::Edit(_) => format!("Edit {}", E::LABEL),
        }
    }

    /// Point the open dialog at another record (or a blank one), reseeding
    /// the same form.
    pub fn switch_to(&mut self, mode: SessionMode) -> Result<(), StoreError> {
        let values = match mode {
            SessionMode::Add => E::initial_values(None),
            SessionMode::Edit(id) => {
                let record = self.manager.get(id).ok_or(StoreError::NotFound {
                    entity: E::KIND,
                    id,
                })?;
                E::initial_values(Some(&record))
            }
        };
        self.form.reset(values);
        self.mode = mode;
        Ok(())
    }

    /// Validate the form and, if it passes, store the record.
    pub fn submit(&self) -> Result<SessionOutcome<E>, AdminError> {
        let mut saved = None;
        let outcome = self.form.submit(|values| saved = Some(self.apply(values)));
        if let Some(result) = saved {
            return result.map(SessionOutcome::Saved);
        }
        Ok(SessionOutcome::Invalid(
            outcome.errors().cloned().unwrap_or_default(),
        ))
    }

    fn apply(&self, values: &FormState) -> Result<E, AdminError> {
        let draft = E::draft_from(values)?;
        match self.mode {
            SessionMode::Add => Ok(self.manager.add(draft)),
            SessionMode::Edit(id) => Ok(self.manager.update(id, draft)?),
        }
    }
}
