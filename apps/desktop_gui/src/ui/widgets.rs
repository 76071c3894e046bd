use eframe::egui;
use shared::domain::UserRecord;

use crate::controller::reducer::UiAction;

pub const CARD_WIDTH: f32 = 300.0;
const COVER_HEIGHT: f32 = 120.0;

const COVER_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(88, 101, 242),
    egui::Color32::from_rgb(35, 165, 90),
    egui::Color32::from_rgb(235, 69, 158),
    egui::Color32::from_rgb(250, 166, 26),
    egui::Color32::from_rgb(0, 168, 252),
    egui::Color32::from_rgb(114, 137, 218),
];

pub fn user_card(
    ui: &mut egui::Ui,
    index: usize,
    record: &UserRecord,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                cover_placeholder(ui, &record.name);
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&record.name).strong().size(17.0));
                ui.add_space(4.0);
                detail_row(ui, "✉", &record.email);
                detail_row(ui, "☎", &record.phone);
                detail_row(ui, "🌐", &record.website);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("✏ Edit").clicked() {
                        actions.push(UiAction::OpenEdit {
                            index,
                            id: record.id,
                        });
                    }
                    if ui.button("🗑 Delete").clicked() {
                        actions.push(UiAction::Delete(record.id));
                    }
                });
            });
        });
}

fn detail_row(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).weak());
        ui.add(egui::Label::new(text).truncate());
    });
}

// Stands in for a cover image.
fn cover_placeholder(ui: &mut egui::Ui, name: &str) {
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(CARD_WIDTH, COVER_HEIGHT), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(6), cover_color(name));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::proportional(36.0),
        egui::Color32::WHITE,
    );
}

pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub fn cover_color(name: &str) -> egui::Color32 {
    let sum = name
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
    COVER_COLORS[sum % COVER_COLORS.len()]
}
