//! Add/edit dialog state machine and the draft it binds to.

use client_core::{RecordDraft, RecordStore};
use shared::domain::{RecordField, UserId, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    CreateDraft,
    EditDraft(UserId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(UserId),
    Updated { id: UserId, matched: bool },
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: ModalState,
    draft: RecordDraft,
}

impl FormController {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn editing(&self) -> bool {
        matches!(self.state, ModalState::EditDraft(_))
    }

    pub fn title(&self) -> &'static str {
        if self.editing() {
            "Edit User"
        } else {
            "Add New User"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing() {
            "Save changes"
        } else {
            "Add User"
        }
    }

    pub fn field(&self, field: RecordField) -> &str {
        self.draft.field(field)
    }

    pub fn open_create(&mut self) {
        self.draft = RecordDraft::default();
        self.state = ModalState::CreateDraft;
    }

    /// Allowed from any state; an unsaved draft is discarded.
    pub fn open_edit(&mut self, record: &UserRecord) {
        self.draft = RecordDraft::from_record(record);
        self.state = ModalState::EditDraft(record.id);
    }

    /// Returns `false` when the dialog is closed and the edit was dropped.
    pub fn set_field(&mut self, field: RecordField, value: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        *self.draft.field_mut(field) = if field == RecordField::Phone {
            numeric_input(value)
        } else {
            value.to_string()
        };
        true
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Applies the draft to `store` and closes the dialog. No-op while closed.
    pub fn submit(&mut self, store: &mut RecordStore) -> Option<SubmitOutcome> {
        let outcome = match self.state {
            ModalState::Closed => return None,
            ModalState::CreateDraft => SubmitOutcome::Created(store.create(&self.draft)),
            ModalState::EditDraft(id) => {
                self.draft.id = Some(id);
                let matched = store.update(&self.draft);
                SubmitOutcome::Updated { id, matched }
            }
        };
        self.reset();
        Some(outcome)
    }

    fn reset(&mut self) {
        self.draft = RecordDraft::default();
        self.state = ModalState::Closed;
    }
}

/// Keeps only what a numeric text input lets through. Lossy: spaces and
/// extension markers in a loaded phone number are dropped on the first edit.
pub fn numeric_input(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect()
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
