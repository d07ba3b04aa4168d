//! Hue/saturation disc: angle picks hue, radius picks saturation.

use std::f32::consts::TAU;

use eframe::egui;

use super::colors::chrome;
use crate::color::{channel_to_unit, spread_hues, unit_to_channel, Hsv};

/// Disc radius in texture pixels.
const RADIUS: f32 = 255.0;
/// Disc image side length (2 * RADIUS + 1).
const DIAMETER: usize = 511;
/// On-screen widget side length.
const PANEL_SIZE: f32 = 520.0;

/// Hue circle widget. The disc image depends only on V, so it is cached as
/// a texture and rebuilt when V crosses an 8-bit step.
pub struct HueWheel {
    texture: Option<egui::TextureHandle>,
    cached_value: u8,
}

impl HueWheel {
    pub fn new() -> Self {
        Self {
            texture: None,
            cached_value: 0,
        }
    }

    /// Show the wheel and its palette markers.
    ///
    /// Returns true when the user picked a new hue/saturation by pressing
    /// or dragging on the disc.
    pub fn show(&mut self, ui: &mut egui::Ui, hsv: &mut Hsv, division: u32) -> bool {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(PANEL_SIZE, PANEL_SIZE),
            egui::Sense::click_and_drag(),
        );
        let center = rect.center();

        let texture = self.texture_for(ui.ctx(), hsv.v);
        let disc_rect =
            egui::Rect::from_center_size(center, egui::vec2(DIAMETER as f32, DIAMETER as f32));
        ui.painter().image(
            texture.id(),
            disc_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        self.texture = Some(texture);

        let mut changed = false;
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let cx = pos.x - center.x;
                let cy = center.y - pos.y; // y up
                let distance = (cx * cx + cy * cy).sqrt();
                let h = cy.atan2(cx).rem_euclid(TAU) / TAU;
                let s = (distance / RADIUS).min(1.0);
                *hsv = Hsv::new(h, s, hsv.v);
                changed = true;
            }
        }

        // Markers for every sampled hue at the selected saturation radius;
        // the operating point is drawn larger.
        let r = hsv.s * RADIUS;
        for (i, h) in spread_hues(hsv.h, division as usize).enumerate() {
            let angle = h * TAU;
            let marker = egui::pos2(center.x + angle.cos() * r, center.y - angle.sin() * r);
            let size = if i == 0 { 4.0 } else { 2.5 };
            ui.painter()
                .circle_stroke(marker, size, egui::Stroke::new(1.5, chrome::MARKER));
        }

        changed
    }

    /// Texture of the disc at the given value level.
    fn texture_for(&mut self, ctx: &egui::Context, value: f32) -> egui::TextureHandle {
        let quantized = unit_to_channel(value);
        match self.texture.take() {
            Some(texture) if self.cached_value == quantized => texture,
            _ => {
                self.cached_value = quantized;
                ctx.load_texture(
                    "hue-disc",
                    render_disc(channel_to_unit(quantized)),
                    egui::TextureOptions::LINEAR,
                )
            }
        }
    }
}

impl Default for HueWheel {
    fn default() -> Self {
        Self::new()
    }
}

/// Paint the HS disc at value `v`. Pixels outside the rim are transparent,
/// with a one-pixel alpha ramp along the edge.
fn render_disc(v: f32) -> egui::ColorImage {
    let mut rgba = vec![0u8; DIAMETER * DIAMETER * 4];
    for y in 0..DIAMETER {
        let cy = RADIUS - y as f32;
        for x in 0..DIAMETER {
            let cx = x as f32 - RADIUS;
            let distance = (cx * cx + cy * cy).sqrt();
            if distance >= RADIUS + 1.0 {
                continue;
            }
            let h = cy.atan2(cx).rem_euclid(TAU) / TAU;
            let s = (distance / RADIUS).clamp(0.0, 1.0);
            let [r, g, b] = Hsv::new(h, s, v).to_rgb().to_bytes();
            let alpha = (RADIUS + 1.0 - distance).min(1.0);
            let offset = (y * DIAMETER + x) * 4;
            rgba[offset] = r;
            rgba[offset + 1] = g;
            rgba[offset + 2] = b;
            rgba[offset + 3] = unit_to_channel(alpha);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([DIAMETER, DIAMETER], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_image_has_expected_dimensions() {
        let image = render_disc(1.0);
        assert_eq!(image.size, [DIAMETER, DIAMETER]);
    }

    #[test]
    fn disc_center_column_is_opaque_and_corners_transparent() {
        let image = render_disc(1.0);
        let center = image.pixels[(DIAMETER / 2) * DIAMETER + DIAMETER / 2];
        assert_eq!(center.a(), 255);
        assert_eq!(image.pixels[0].a(), 0);
        assert_eq!(image.pixels[DIAMETER * DIAMETER - 1].a(), 0);
    }

    #[test]
    fn disc_right_edge_midline_is_red_at_full_value() {
        // angle 0 (positive x axis) at full saturation is pure red
        let image = render_disc(1.0);
        let y = DIAMETER / 2;
        let x = DIAMETER - 2;
        let pixel = image.pixels[y * DIAMETER + x];
        assert_eq!(pixel.r(), 255);
        assert!(pixel.g() < 3);
        assert!(pixel.b() < 3);
    }
}
