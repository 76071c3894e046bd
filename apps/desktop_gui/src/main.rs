use std::sync::Arc;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{DirectoryClient, RecordSource};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{Args, StartupConfig};
use crate::controller::events::UiEvent;
use crate::ui::{app::APP_TITLE, CardListApp};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig::resolve(&args)?;
    tracing::info!(
        endpoint = %startup.endpoint,
        id_strategy = %startup.id_strategy,
        "starting user directory"
    );

    let http = reqwest::Client::builder()
        .user_agent(concat!("desktop_gui/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build http client")?;
    let source: Arc<dyn RecordSource> =
        Arc::new(DirectoryClient::with_http_client(http, startup.endpoint.clone()));

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(source, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    let id_strategy = startup.id_strategy;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(CardListApp::new(cmd_tx, ui_rx, id_strategy)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop app exited with error: {err}"))
}
