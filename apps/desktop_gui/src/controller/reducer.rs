//! Applies user actions and backend events to the owned card list state.

use client_core::{IdStrategy, RecordStore};
use shared::domain::{RecordField, UserId};

use crate::controller::{
    events::{err_label, UiEvent},
    form::{FormController, SubmitOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotRequested,
    Pending,
    Loaded(usize),
    Failed,
}

/// Something the user did in the card list or the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenCreate,
    /// Edit the card at `index`; `id` guards against a stale index.
    OpenEdit { index: usize, id: UserId },
    EditField { field: RecordField, value: String },
    Submit,
    Cancel,
    Delete(UserId),
}

#[derive(Debug, Clone)]
pub struct CardListState {
    pub store: RecordStore,
    pub form: FormController,
    pub load: LoadStatus,
    pub status: String,
}

impl CardListState {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            store: RecordStore::new(strategy),
            form: FormController::default(),
            load: LoadStatus::NotRequested,
            status: String::new(),
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self.load {
            LoadStatus::NotRequested | LoadStatus::Pending => "Loading users...",
            LoadStatus::Loaded(_) | LoadStatus::Failed => "No users to show.",
        }
    }
}

pub fn apply_action(state: &mut CardListState, action: UiAction) {
    match action {
        UiAction::OpenCreate => state.form.open_create(),
        UiAction::OpenEdit { index, id } => {
            let record = state
                .store
                .records()
                .get(index)
                .filter(|record| record.id == id)
                .or_else(|| state.store.get(id));
            match record {
                Some(record) => state.form.open_edit(record),
                None => tracing::debug!(%id, index, "edit requested for unknown record"),
            }
        }
        UiAction::EditField { field, value } => {
            state.form.set_field(field, &value);
        }
        UiAction::Submit => match state.form.submit(&mut state.store) {
            Some(SubmitOutcome::Created(id)) => {
                tracing::info!(%id, "user added");
            }
            Some(SubmitOutcome::Updated { id, matched }) => {
                tracing::info!(%id, matched, "user edited");
            }
            None => {}
        },
        UiAction::Cancel => state.form.cancel(),
        UiAction::Delete(id) => {
            if state.store.delete(id) {
                tracing::info!(%id, "user deleted");
            }
        }
    }
}

pub fn apply_event(state: &mut CardListState, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            state.status = message;
        }
        UiEvent::RecordsLoaded(records) => {
            let count = records.len();
            state.store.replace_all(records);
            state.load = LoadStatus::Loaded(count);
            state.status = format!("Loaded {count} users");
        }
        UiEvent::LoadFailed(err) => {
            // logged only, the card list simply stays as it is
            tracing::warn!(
                category = err_label(err.category()),
                context = ?err.context(),
                "user directory unavailable: {}",
                err.message()
            );
            state.load = LoadStatus::Failed;
            state.status.clear();
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
