//! Saturation/value plane: a square cut through the HSV cylinder.

use eframe::egui;

use super::colors::{chrome, to_color32};
use crate::color::{unit_to_channel, Hsv};

/// Image side length in pixels (256 steps per axis).
const RANGE: usize = 256;
/// Channel span: coordinates map 0..=255 onto [0, 1].
const SPAN: f32 = 255.0;
/// On-screen widget side length.
const PANEL_SIZE: f32 = 260.0;

/// SV square widget. Saturation runs rightward, value upward.
///
/// The square is drawn as a solid fill of the hue's max color with a static
/// white-to-black mask composited on top, so no texture depends on the
/// current selection and the mask is rendered exactly once.
pub struct SvSquare {
    mask: Option<egui::TextureHandle>,
}

impl SvSquare {
    pub fn new() -> Self {
        Self { mask: None }
    }

    /// Show the square. Returns true when the user picked a new (s, v).
    pub fn show(&mut self, ui: &mut egui::Ui, hsv: &mut Hsv) -> bool {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(PANEL_SIZE, PANEL_SIZE),
            egui::Sense::click_and_drag(),
        );
        let square =
            egui::Rect::from_center_size(rect.center(), egui::vec2(RANGE as f32, RANGE as f32));

        let max_color = to_color32(Hsv::new(hsv.h, 1.0, 1.0).to_rgb());
        ui.painter()
            .rect_filled(square, egui::CornerRadius::ZERO, max_color);

        let mask = match self.mask.take() {
            Some(mask) => mask,
            None => ui.ctx().load_texture(
                "sv-mask",
                render_mask(),
                egui::TextureOptions::LINEAR,
            ),
        };
        ui.painter().image(
            mask.id(),
            square,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        self.mask = Some(mask);

        let mut changed = false;
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let s = ((pos.x - square.left()) / SPAN).clamp(0.0, 1.0);
                let v = ((square.bottom() - pos.y) / SPAN).clamp(0.0, 1.0);
                *hsv = Hsv::new(hsv.h, s, v);
                changed = true;
            }
        }

        // selection marker
        let marker = egui::pos2(
            square.left() + hsv.s * SPAN,
            square.bottom() - hsv.v * SPAN,
        );
        ui.painter()
            .circle_stroke(marker, 3.0, egui::Stroke::new(1.5, chrome::MARKER));

        changed
    }
}

impl Default for SvSquare {
    fn default() -> Self {
        Self::new()
    }
}

/// The static SV mask.
///
/// Compositing mask over the hue's max color `c` must give the true HSV
/// color `c * s * v + white * (1 - s) * v`, so each mask pixel carries
/// alpha `1 - s * v` and a gray level `v * (1 - s) / (1 - s * v)`.
fn render_mask() -> egui::ColorImage {
    let mut rgba = vec![0u8; RANGE * RANGE * 4];
    for y in 0..RANGE {
        let v = (RANGE - 1 - y) as f32 / SPAN;
        for x in 0..RANGE {
            let s = x as f32 / SPAN;
            let alpha = 1.0 - s * v;
            let gray = if alpha > 0.0 {
                v * (1.0 - s) / alpha
            } else {
                0.0
            };
            let offset = (y * RANGE + x) * 4;
            let level = unit_to_channel(gray);
            rgba[offset] = level;
            rgba[offset + 1] = level;
            rgba[offset + 2] = level;
            rgba[offset + 3] = unit_to_channel(alpha);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([RANGE, RANGE], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_pixel(image: &egui::ColorImage, x: usize, y: usize) -> egui::Color32 {
        image.pixels[y * RANGE + x]
    }

    #[test]
    fn mask_corners() {
        let image = render_mask();
        // top-left: s=0, v=1 -> opaque white
        let top_left = mask_pixel(&image, 0, 0);
        assert_eq!(top_left.a(), 255);
        assert_eq!(top_left.r(), 255);
        // top-right: s=1, v=1 -> fully transparent, max color shows through
        assert_eq!(mask_pixel(&image, RANGE - 1, 0).a(), 0);
        // bottom row: v=0 -> opaque black
        let bottom_left = mask_pixel(&image, 0, RANGE - 1);
        assert_eq!(bottom_left.a(), 255);
        assert_eq!(bottom_left.r(), 0);
        let bottom_right = mask_pixel(&image, RANGE - 1, RANGE - 1);
        assert_eq!(bottom_right.a(), 255);
        assert_eq!(bottom_right.r(), 0);
    }

    #[test]
    fn mask_composites_to_true_hsv_color() {
        // Blend the mask over a handful of max colors and compare against
        // the direct conversion.
        let image = render_mask();
        for &h in &[0.0f32, 0.25, 0.6] {
            let max = Hsv::new(h, 1.0, 1.0).to_rgb();
            for &(x, y) in &[(0usize, 0usize), (128, 64), (200, 200), (255, 128)] {
                let s = x as f32 / SPAN;
                let v = (RANGE - 1 - y) as f32 / SPAN;
                let alpha = 1.0 - s * v;
                let gray = if alpha > 0.0 {
                    v * (1.0 - s) / alpha
                } else {
                    0.0
                };
                let expect = Hsv::new(h, s, v).to_rgb();
                for (channel, base) in [(expect.r, max.r), (expect.g, max.g), (expect.b, max.b)] {
                    let blended = base * (1.0 - alpha) + gray * alpha;
                    assert!(
                        (blended - channel).abs() < 2.0 / 255.0,
                        "h={h} s={s} v={v}: {blended} vs {channel}"
                    );
                }
                // the stored pixel matches the analytic mask
                let pixel = mask_pixel(&image, x, y);
                assert_eq!(pixel.a(), unit_to_channel(alpha));
            }
        }
    }
}
