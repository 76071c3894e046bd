use super::*;
use crate::controller::{
    events::{UiError, UiErrorCategory, UiErrorContext},
    form::ModalState,
};
use shared::domain::UserRecord;

fn loaded_state(records: Vec<UserRecord>) -> CardListState {
    let mut state = CardListState::new(IdStrategy::Monotonic);
    apply_event(&mut state, UiEvent::RecordsLoaded(records));
    state
}

fn user(id: i64, name: &str) -> UserRecord {
    UserRecord::new(UserId(id), name, format!("{name}@x.com"), "1", "w")
}

fn edit(field: RecordField, value: &str) -> UiAction {
    UiAction::EditField {
        field,
        value: value.to_string(),
    }
}

#[test]
fn successful_load_populates_store_in_source_order() {
    let state = loaded_state(vec![user(3, "C"), user(1, "A"), user(2, "B")]);

    let ids: Vec<_> = state.store.records().iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(state.load, LoadStatus::Loaded(3));
    assert_eq!(state.status, "Loaded 3 users");
}

#[test]
fn failed_load_leaves_store_unchanged() {
    let mut state = CardListState::new(IdStrategy::Monotonic);
    apply_action(&mut state, UiAction::OpenCreate);
    apply_action(&mut state, edit(RecordField::Name, "Local"));
    apply_action(&mut state, UiAction::Submit);
    let before = state.store.records().to_vec();

    apply_event(
        &mut state,
        UiEvent::LoadFailed(UiError::new(
            UiErrorCategory::Transport,
            UiErrorContext::LoadUsers,
            "failed to reach user directory: connection refused",
        )),
    );

    assert_eq!(state.store.records(), before.as_slice());
    assert_eq!(state.load, LoadStatus::Failed);
    assert_eq!(state.empty_text(), "No users to show.");
}

#[test]
fn add_flow_creates_record_and_closes_dialog() {
    let mut state = loaded_state(Vec::new());

    apply_action(&mut state, UiAction::OpenCreate);
    apply_action(&mut state, edit(RecordField::Name, "A"));
    apply_action(&mut state, edit(RecordField::Email, "a@x.com"));
    apply_action(&mut state, edit(RecordField::Phone, "5"));
    apply_action(&mut state, edit(RecordField::Website, "w"));
    apply_action(&mut state, UiAction::Submit);

    assert_eq!(
        state.store.records(),
        &[UserRecord::new(UserId(1), "A", "a@x.com", "5", "w")]
    );
    assert_eq!(state.form.state(), ModalState::Closed);
}

#[test]
fn edit_flow_updates_matching_record_only() {
    let mut state = loaded_state(vec![user(1, "A"), user(2, "B")]);
    let untouched = state.store.records()[1].clone();

    apply_action(&mut state, UiAction::OpenEdit {
            index: 0,
            id: UserId(1),
        });
    apply_action(&mut state, edit(RecordField::Name, "B"));
    apply_action(&mut state, edit(RecordField::Email, "b@x.com"));
    apply_action(&mut state, UiAction::Submit);

    assert_eq!(state.store.len(), 2);
    assert_eq!(state.store.records()[0].name, "B");
    assert_eq!(state.store.records()[0].email, "b@x.com");
    assert_eq!(state.store.records()[1], untouched);
    assert!(!state.form.editing());
}

#[test]
fn edit_binds_the_clicked_card_when_ids_repeat() {
    let mut state = CardListState::new(IdStrategy::LengthPlusOne);
    apply_event(
        &mut state,
        UiEvent::RecordsLoaded(vec![user(1, "Ann"), user(2, "Bob")]),
    );
    apply_action(&mut state, UiAction::Delete(UserId(1)));
    apply_action(&mut state, UiAction::OpenCreate);
    apply_action(&mut state, edit(RecordField::Name, "Cat"));
    apply_action(&mut state, UiAction::Submit);
    let ids: Vec<_> = state.store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![UserId(2), UserId(2)]);

    apply_action(
        &mut state,
        UiAction::OpenEdit {
            index: 1,
            id: UserId(2),
        },
    );
    assert_eq!(state.form.field(RecordField::Name), "Cat");

    apply_action(&mut state, edit(RecordField::Name, "Cat2"));
    apply_action(&mut state, UiAction::Submit);

    let names: Vec<_> = state.store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cat2", "Cat2"]);
}

#[test]
fn stale_edit_index_falls_back_to_id_lookup() {
    let mut state = loaded_state(vec![user(1, "A"), user(2, "B")]);

    apply_action(
        &mut state,
        UiAction::OpenEdit {
            index: 7,
            id: UserId(2),
        },
    );

    assert_eq!(state.form.state(), ModalState::EditDraft(UserId(2)));
    assert_eq!(state.form.field(RecordField::Name), "B");
}

#[test]
fn edit_then_cancel_changes_nothing() {
    let mut state = loaded_state(vec![user(1, "A")]);
    let before = state.store.records().to_vec();

    apply_action(&mut state, UiAction::OpenEdit {
            index: 0,
            id: UserId(1),
        });
    apply_action(&mut state, edit(RecordField::Name, "nope"));
    apply_action(&mut state, UiAction::Cancel);

    assert_eq!(state.store.records(), before.as_slice());
    assert!(state.form.draft().is_empty());
    assert_eq!(state.form.state(), ModalState::Closed);
}

#[test]
fn edit_of_unknown_record_keeps_dialog_closed() {
    let mut state = loaded_state(vec![user(1, "A")]);

    apply_action(&mut state, UiAction::OpenEdit {
            index: 0,
            id: UserId(42),
        });

    assert_eq!(state.form.state(), ModalState::Closed);
}

#[test]
fn delete_removes_matching_record_and_ignores_missing() {
    let mut state = loaded_state(vec![user(1, "A"), user(2, "B")]);

    apply_action(&mut state, UiAction::Delete(UserId(1)));
    apply_action(&mut state, UiAction::Delete(UserId(9)));

    let ids: Vec<_> = state.store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![UserId(2)]);
}

#[test]
fn late_load_replaces_locally_created_records() {
    let mut state = CardListState::new(IdStrategy::Monotonic);
    state.load = LoadStatus::Pending;
    apply_action(&mut state, UiAction::OpenCreate);
    apply_action(&mut state, edit(RecordField::Name, "early"));
    apply_action(&mut state, UiAction::Submit);
    assert_eq!(state.empty_text(), "Loading users...");

    apply_event(&mut state, UiEvent::RecordsLoaded(vec![user(1, "A")]));

    assert_eq!(state.store.len(), 1);
    assert_eq!(state.store.records()[0].name, "A");
}

#[test]
fn info_event_updates_status_line() {
    let mut state = CardListState::new(IdStrategy::LengthPlusOne);
    apply_event(&mut state, UiEvent::Info("Backend worker ready".to_string()));
    assert_eq!(state.status, "Backend worker ready");
}
