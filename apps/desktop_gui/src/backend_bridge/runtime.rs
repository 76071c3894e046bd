//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::RecordSource;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Spawns the backend worker. It runs until every command sender is dropped.
pub fn launch(
    source: Arc<dyn RecordSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::LoadFailed(UiError::new(
                    UiErrorCategory::Unknown,
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            tracing::debug!(source = %source.describe(), "backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend: processing command");
                match cmd {
                    BackendCommand::LoadRecords => {
                        let _ = ui_tx.try_send(UiEvent::Info("Loading users...".to_string()));
                        match client_core::load(source.as_ref()).await {
                            Ok(records) => {
                                let _ = ui_tx.try_send(UiEvent::RecordsLoaded(records));
                            }
                            Err(err) => {
                                let _ = ui_tx.try_send(UiEvent::LoadFailed(UiError::from_fetch(
                                    UiErrorContext::LoadUsers,
                                    &err,
                                )));
                            }
                        }
                    }
                }
            }
            tracing::debug!("backend worker stopping: command queue closed");
        });
    })
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
