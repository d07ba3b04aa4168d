//! Linked slider + numeric entry rows for HSV and RGB.

use eframe::egui;

use crate::color::{Hsv, Rgb};

/// Six linked rows: H (0-360), S, V, R, G, B (0-255).
///
/// Edits on the HSV side recompute RGB and vice versa; values are only
/// written back to the canonical state when a widget actually changed, so
/// the two groups never feed back into each other.
pub fn color_sliders(ui: &mut egui::Ui, hsv: &mut Hsv) -> bool {
    let mut h = (hsv.h * 360.0).round() as i32;
    let mut s = (hsv.s * 255.0).round() as i32;
    let mut v = (hsv.v * 255.0).round() as i32;

    let mut hsv_edited = false;
    hsv_edited |= slider_row(ui, "H", &mut h, 360);
    hsv_edited |= slider_row(ui, "S", &mut s, 255);
    hsv_edited |= slider_row(ui, "V", &mut v, 255);
    if hsv_edited {
        *hsv = Hsv::new(h as f32 / 360.0, s as f32 / 255.0, v as f32 / 255.0);
    }

    let [mut r, mut g, mut b] = hsv.to_rgb().to_bytes().map(i32::from);
    let mut rgb_edited = false;
    rgb_edited |= slider_row(ui, "R", &mut r, 255);
    rgb_edited |= slider_row(ui, "G", &mut g, 255);
    rgb_edited |= slider_row(ui, "B", &mut b, 255);
    if rgb_edited {
        *hsv = Rgb::from_bytes([r as u8, g as u8, b as u8]).to_hsv();
    }

    hsv_edited || rgb_edited
}

/// One labeled slider synchronized with a numeric entry.
fn slider_row(ui: &mut egui::Ui, label: &str, value: &mut i32, max: i32) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.monospace(label);
        changed |= ui
            .add(egui::Slider::new(value, 0..=max).show_value(false))
            .changed();
        changed |= ui.add(egui::DragValue::new(value).range(0..=max)).changed();
    });
    changed
}
