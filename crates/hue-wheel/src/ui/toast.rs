//! Transient centered notification.

use std::time::{Duration, Instant};

use eframe::egui;

use super::colors::chrome;

/// A short-lived message floating over the window center.
pub struct Toast {
    message: String,
    until: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            until: Instant::now() + duration,
        }
    }

    /// Draw the toast. Returns false once expired so the caller can drop it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if Instant::now() >= self.until {
            return false;
        }
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(chrome::TOAST_BG)
                    .stroke(egui::Stroke::new(1.0, chrome::TOAST_BORDER))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&self.message).color(chrome::TOAST_TEXT));
                    });
            });
        // keep repainting so expiry is noticed without input
        ctx.request_repaint_after(Duration::from_millis(100));
        true
    }
}
