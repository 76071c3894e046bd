use std::time::Duration;

use client_core::IdStrategy;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::RecordField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::dispatch_backend_command,
    reducer::{apply_action, apply_event, CardListState, LoadStatus, UiAction},
};
use crate::ui::widgets;

pub const APP_TITLE: &str = "User Directory";

pub struct CardListApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: CardListState,
}

impl CardListApp {
    /// Builds the app and queues the one directory load it will ever request.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        id_strategy: IdStrategy,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: CardListState::new(id_strategy),
        };
        app.request_initial_load();
        app
    }

    fn request_initial_load(&mut self) {
        if self.state.load != LoadStatus::NotRequested {
            return;
        }
        self.state.load = if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadRecords,
            &mut self.state.status,
        ) {
            LoadStatus::Pending
        } else {
            LoadStatus::Failed
        };
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.state, event);
        }
    }

    fn show_toolbar(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("card_list_toolbar").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let add = egui::Button::new(egui::RichText::new("+").size(22.0).strong())
                    .min_size(egui::vec2(40.0, 40.0))
                    .corner_radius(egui::CornerRadius::same(20));
                if ui.add(add).on_hover_text("Add user").clicked() {
                    actions.push(UiAction::OpenCreate);
                }
                ui.heading(APP_TITLE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.state.status).weak());
                });
            });
            ui.add_space(8.0);
        });
    }

    fn show_cards(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.store.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new(self.state.empty_text()).weak());
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
                        for (index, record) in self.state.store.records().iter().enumerate() {
                            widgets::user_card(ui, index, record, actions);
                        }
                    });
                });
        });
    }

    fn show_dialog(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let form = &self.state.form;
        if !form.is_open() {
            return;
        }

        let mut open = true;
        egui::Window::new(form.title())
            .id(egui::Id::new("user_form_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("user_form_fields")
                    .num_columns(2)
                    .spacing([8.0, 10.0])
                    .show(ui, |ui| {
                        for field in RecordField::ALL {
                            ui.label(field.label());
                            let mut value = form.field(field).to_string();
                            let edit = egui::TextEdit::singleline(&mut value)
                                .id_salt(("user_form", field.as_str()))
                                .desired_width(260.0);
                            if ui.add(edit).changed() {
                                actions.push(UiAction::EditField { field, value });
                            }
                            ui.end_row();
                        }
                    });

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let submit = egui::RichText::new(form.submit_label()).strong();
                    if ui.button(submit).clicked() {
                        actions.push(UiAction::Submit);
                    }
                    if ui.button("Close").clicked() {
                        actions.push(UiAction::Cancel);
                    }
                });
            });

        if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.push(UiAction::Cancel);
        }
    }
}

impl eframe::App for CardListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_toolbar(ctx, &mut actions);
        self.show_cards(ctx, &mut actions);
        self.show_dialog(ctx, &mut actions);

        if !actions.is_empty() {
            for action in actions {
                apply_action(&mut self.state, action);
            }
            ctx.request_repaint();
        }

        if self.state.load == LoadStatus::Pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
