//! UI color constants and bridging between core colors and egui.

use eframe::egui;

use crate::color::Rgb;

/// Color constants for UI chrome.
pub mod chrome {
    use eframe::egui;

    pub const MARKER: egui::Color32 = egui::Color32::WHITE;
    pub const INVALID_INPUT_BG: egui::Color32 = egui::Color32::from_rgb(255, 200, 200);
    pub const TOAST_BG: egui::Color32 = egui::Color32::WHITE;
    pub const TOAST_TEXT: egui::Color32 = egui::Color32::from_rgb(40, 40, 40);
    pub const TOAST_BORDER: egui::Color32 = egui::Color32::from_rgb(190, 190, 190);
}

/// Core color to an opaque egui color.
pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    let [r, g, b] = rgb.to_bytes();
    egui::Color32::from_rgb(r, g, b)
}

/// egui color back to a core color. Alpha is dropped.
pub fn from_color32(color: egui::Color32) -> Rgb {
    Rgb::from_bytes([color.r(), color.g(), color.b()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_round_trip() {
        let rgb = Rgb::from_bytes([12, 180, 240]);
        assert_eq!(from_color32(to_color32(rgb)).to_bytes(), [12, 180, 240]);
    }
}
