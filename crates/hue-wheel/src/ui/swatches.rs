//! Palette swatch list with copyable hex/decimal labels.

use eframe::egui;

use super::colors::to_color32;
use crate::color::{format_hex, Palette};

const CELL_WIDTH: f32 = 30.0;
const CELL_HEIGHT: f32 = 17.0;

/// Show the palette as a swatch column plus `#RRGGBB` and `r, g, b` label
/// columns. Returns the text of a clicked label, ready for the clipboard.
pub fn show(ui: &mut egui::Ui, palette: &Palette) -> Option<String> {
    let mut copied = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                for &color in palette.colors() {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(CELL_WIDTH, CELL_HEIGHT),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, egui::CornerRadius::ZERO, to_color32(color));
                }
            });
            ui.vertical(|ui| {
                for &color in palette.colors() {
                    let text = format!("#{}", format_hex(color));
                    if copy_label(ui, &text).clicked() {
                        copied = Some(text);
                    }
                }
            });
            ui.vertical(|ui| {
                for &color in palette.colors() {
                    let [r, g, b] = color.to_bytes();
                    let text = format!("{r:3}, {g:3}, {b:3}");
                    if copy_label(ui, &text).clicked() {
                        copied = Some(text);
                    }
                }
            });
        });
    });
    copied
}

fn copy_label(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Label::new(egui::RichText::new(text).monospace()).sense(egui::Sense::click()))
        .on_hover_text("Copy to clipboard")
}
