use super::*;
use async_trait::async_trait;
use client_core::FetchError;
use crossbeam_channel::bounded;
use shared::domain::{UserId, UserRecord};
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

struct FakeSource {
    records: Option<Vec<UserRecord>>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn ok(records: Vec<UserRecord>) -> Self {
        Self {
            records: Some(records),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            records: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => Err(FetchError::Decode(
                serde_json::from_str::<Vec<UserRecord>>("not json").expect_err("invalid json"),
            )),
        }
    }

    fn describe(&self) -> String {
        "fake://users".to_string()
    }
}

fn next_outcome(ui_rx: &Receiver<UiEvent>) -> UiEvent {
    loop {
        match ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("backend event")
        {
            UiEvent::Info(_) => continue,
            event => return event,
        }
    }
}

#[test]
fn load_command_answers_with_loaded_records() {
    let source = Arc::new(FakeSource::ok(vec![
        UserRecord::new(UserId(1), "A", "a@x.com", "1", "a.org"),
        UserRecord::new(UserId(2), "B", "b@x.com", "2", "b.org"),
    ]));
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    let worker = launch(source.clone(), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue command");
    let event = next_outcome(&ui_rx);

    match event {
        UiEvent::RecordsLoaded(records) => {
            let ids: Vec<_> = records.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![UserId(1), UserId(2)]);
        }
        _ => panic!("expected RecordsLoaded"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exits once queue closes");
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_load_is_reported_as_decode_error() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let (ui_tx, ui_rx) = bounded(4);
    let worker = launch(Arc::new(FakeSource::failing()), cmd_rx, ui_tx);

    cmd_tx.send(BackendCommand::LoadRecords).expect("queue command");
    let event = next_outcome(&ui_rx);

    match event {
        UiEvent::LoadFailed(err) => {
            assert_eq!(
                err.category(),
                crate::controller::events::UiErrorCategory::Decode
            );
            assert_eq!(err.context(), UiErrorContext::LoadUsers);
            assert!(err.message().contains("malformed"));
        }
        _ => panic!("expected LoadFailed"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exits");
}
