//! Pure color math: HSV/RGB conversion, hex parsing, palette sampling.
//!
//! Nothing in here knows about the UI toolkit. All functions are total:
//! out-of-range inputs clamp (hue wraps), nothing panics, so any front end
//! can feed raw user input straight in.

mod convert;
mod hex;
mod palette;

pub use hex::{format_hex, parse_hex};
pub use palette::{spread_hues, Palette};

pub use convert::{channel_to_unit, unit_to_channel, with_alpha, with_alpha_u8};

/// HSV triple with all components normalized to [0, 1].
///
/// Hue is circular and wraps modulo 1.0; saturation and value clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Build an HSV value, wrapping hue and clamping saturation/value.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: h.rem_euclid(1.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Six-sector HSV to RGB conversion.
    pub fn to_rgb(self) -> Rgb {
        convert::hsv_to_rgb(self)
    }
}

/// RGB triple with channels normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Build an RGB value, clamping each channel to [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn from_bytes([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: channel_to_unit(r),
            g: channel_to_unit(g),
            b: channel_to_unit(b),
        }
    }

    /// Quantize to 8-bit channels (round half up, saturating).
    pub fn to_bytes(self) -> [u8; 3] {
        [
            unit_to_channel(self.r),
            unit_to_channel(self.g),
            unit_to_channel(self.b),
        ]
    }

    /// Pack into an opaque `0xAARRGGBB` pixel (alpha = 0xFF).
    pub fn to_pixel(self) -> u32 {
        let [r, g, b] = self.to_bytes();
        0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Unpack from a `0xAARRGGBB` pixel. The alpha byte is ignored.
    pub fn from_pixel(pixel: u32) -> Self {
        Self::from_bytes([
            (pixel >> 16) as u8,
            (pixel >> 8) as u8,
            pixel as u8,
        ])
    }

    pub fn to_hsv(self) -> Hsv {
        convert::rgb_to_hsv(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_new_wraps_hue_and_clamps() {
        let hsv = Hsv::new(1.25, -0.5, 2.0);
        assert!((hsv.h - 0.25).abs() < 1e-6);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 1.0);

        // hue exactly 1.0 aliases to 0.0
        assert_eq!(Hsv::new(1.0, 1.0, 1.0).h, 0.0);
        assert!((Hsv::new(-0.25, 1.0, 1.0).h - 0.75).abs() < 1e-6);
    }

    #[test]
    fn rgb_byte_round_trip() {
        for byte in [0u8, 1, 127, 128, 254, 255] {
            let rgb = Rgb::from_bytes([byte, byte, byte]);
            assert_eq!(rgb.to_bytes(), [byte, byte, byte]);
        }
    }

    #[test]
    fn pixel_packing() {
        let red = Rgb::from_bytes([255, 0, 0]);
        assert_eq!(red.to_pixel(), 0xFFFF_0000);

        let color = Rgb::from_bytes([0x12, 0x34, 0x56]);
        assert_eq!(color.to_pixel(), 0xFF12_3456);
        assert_eq!(Rgb::from_pixel(0xFF12_3456).to_bytes(), [0x12, 0x34, 0x56]);
        // alpha byte is ignored on unpack
        assert_eq!(Rgb::from_pixel(0x0012_3456).to_bytes(), [0x12, 0x34, 0x56]);
    }
}
