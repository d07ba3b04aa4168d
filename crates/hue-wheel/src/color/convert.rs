//! HSV/RGB conversion and channel scaling.

use super::{Hsv, Rgb};

/// Six-sector piecewise HSV to RGB.
///
/// Hue is taken modulo 1.0 and expanded to [0, 6); each sector attenuates
/// two channels of `v`. Zero saturation short-circuits to achromatic.
pub(crate) fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    if s <= 0.0 {
        return Rgb::new(v, v, v);
    }
    let hue = h.rem_euclid(1.0) * 6.0;
    let sector = hue as u32;
    let f = hue - sector as f32;
    let (mut r, mut g, mut b) = (v, v, v);
    match sector {
        0 => {
            g *= 1.0 - s * (1.0 - f);
            b *= 1.0 - s;
        }
        1 => {
            r *= 1.0 - s * f;
            b *= 1.0 - s;
        }
        2 => {
            r *= 1.0 - s;
            b *= 1.0 - s * (1.0 - f);
        }
        3 => {
            r *= 1.0 - s;
            g *= 1.0 - s * f;
        }
        4 => {
            r *= 1.0 - s * (1.0 - f);
            g *= 1.0 - s;
        }
        5 => {
            g *= 1.0 - s;
            b *= 1.0 - s * f;
        }
        // hue landed exactly on 6.0, same as sector 0 with f = 0
        _ => {
            g *= 1.0 - s * (1.0 - f);
            b *= 1.0 - s;
        }
    }
    Rgb::new(r, g, b)
}

/// RGB to HSV. Achromatic input (max = min) yields hue 0.
pub(crate) fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut hue = delta;
    if hue > 0.0 {
        if max == r {
            hue = (g - b) / delta;
            if hue < 0.0 {
                hue += 6.0;
            }
        } else if max == g {
            hue = 2.0 + (b - r) / delta;
        } else {
            hue = 4.0 + (r - g) / delta;
        }
    }

    Hsv {
        h: (hue / 6.0).clamp(0.0, 1.0),
        s: if max > 0.0 { delta / max } else { 0.0 },
        v: max,
    }
}

/// [0, 1] float to an 8-bit channel, round half up, saturating.
pub fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// 8-bit channel to a [0, 1] float.
pub fn channel_to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// Replace the alpha byte of a packed `0xAARRGGBB` pixel, alpha in [0, 1].
pub fn with_alpha(pixel: u32, alpha: f32) -> u32 {
    with_alpha_u8(pixel, (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Replace the alpha byte of a packed `0xAARRGGBB` pixel.
pub fn with_alpha_u8(pixel: u32, alpha: u8) -> u32 {
    (pixel & 0x00FF_FFFF) | (u32::from(alpha) << 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_achromatic() {
        for h in [0.0, 0.1, 0.33, 0.5, 0.76, 0.99] {
            for v in [0.0, 0.25, 0.5, 1.0] {
                let rgb = hsv_to_rgb(Hsv::new(h, 0.0, v));
                assert_eq!(rgb, Rgb::new(v, v, v), "h={h} v={v}");
            }
        }
    }

    #[test]
    fn primary_and_secondary_hues() {
        let cases = [
            (0.0, [255, 0, 0]),         // red
            (1.0 / 6.0, [255, 255, 0]), // yellow
            (2.0 / 6.0, [0, 255, 0]),   // green
            (3.0 / 6.0, [0, 255, 255]), // cyan
            (4.0 / 6.0, [0, 0, 255]),   // blue
            (5.0 / 6.0, [255, 0, 255]), // magenta
        ];
        for (h, expected) in cases {
            let rgb = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
            assert_eq!(rgb.to_bytes(), expected, "h={h}");
        }
    }

    #[test]
    fn hue_wraps_modulo_one() {
        let base = hsv_to_rgb(Hsv::new(0.3, 0.8, 0.9));
        let wrapped = hsv_to_rgb(Hsv::new(1.3, 0.8, 0.9));
        assert_eq!(base.to_bytes(), wrapped.to_bytes());
    }

    #[test]
    fn rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(Rgb::from_bytes([255, 0, 0]));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.v, 1.0);

        let green = rgb_to_hsv(Rgb::from_bytes([0, 255, 0]));
        assert!((green.h - 2.0 / 6.0).abs() < 1e-6);

        let blue = rgb_to_hsv(Rgb::from_bytes([0, 0, 255]));
        assert!((blue.h - 4.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn achromatic_rgb_has_zero_hue_and_saturation() {
        for byte in [0u8, 64, 128, 255] {
            let hsv = rgb_to_hsv(Rgb::from_bytes([byte, byte, byte]));
            assert_eq!(hsv.h, 0.0);
            assert_eq!(hsv.s, 0.0);
            assert!((hsv.v - channel_to_unit(byte)).abs() < 1e-6);
        }
    }

    #[test]
    fn round_trip_within_quantization_tolerance() {
        // Sample the byte cube; exact equality is expected but allow one
        // count of quantization slack per channel.
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let src = [r as u8, g as u8, b as u8];
                    let back = hsv_to_rgb(rgb_to_hsv(Rgb::from_bytes(src))).to_bytes();
                    for i in 0..3 {
                        let diff = (i16::from(src[i]) - i16::from(back[i])).abs();
                        assert!(diff <= 1, "{src:?} -> {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn channel_scaling() {
        assert_eq!(unit_to_channel(0.0), 0);
        assert_eq!(unit_to_channel(1.0), 255);
        assert_eq!(unit_to_channel(0.5), 128);
        // saturates instead of wrapping
        assert_eq!(unit_to_channel(2.0), 255);
        assert_eq!(unit_to_channel(-1.0), 0);

        assert_eq!(channel_to_unit(0), 0.0);
        assert_eq!(channel_to_unit(255), 1.0);
    }

    #[test]
    fn alpha_packing() {
        assert_eq!(with_alpha_u8(0xFF11_2233, 0x80), 0x8011_2233);
        assert_eq!(with_alpha(0x0011_2233, 1.0), 0xFF11_2233);
        assert_eq!(with_alpha(0xFF11_2233, 0.0), 0x0011_2233);
        // out-of-range alpha clamps
        assert_eq!(with_alpha(0x0011_2233, 2.0), 0xFF11_2233);
    }
}
