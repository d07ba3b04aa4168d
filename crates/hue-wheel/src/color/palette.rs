//! Evenly spaced hue sampling around the wheel.

use super::{Hsv, Rgb};

/// Ordered set of colors spread evenly around the hue circle, all sharing
/// the base color's saturation and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Sample `count` colors with hues `frac(base.h + i/count)`.
    ///
    /// Index 0 is always the base color itself. With `reverse`, sample `i`
    /// lands in slot `(count - i) % count`, flipping the iteration order
    /// around the base. A count of zero is treated as one.
    pub fn sample(base: Hsv, count: usize, reverse: bool) -> Self {
        let count = count.max(1);
        let mut colors = vec![Rgb::default(); count];
        for (i, h) in spread_hues(base.h, count).enumerate() {
            let slot = if reverse { (count - i) % count } else { i };
            colors[slot] = Hsv::new(h, base.s, base.v).to_rgb();
        }
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The selected color (slot 0 regardless of direction).
    pub fn primary(&self) -> Rgb {
        self.colors[0]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Hues `frac(h0 + i/count)` for `i` in `[0, count)`.
pub fn spread_hues(h0: f32, count: usize) -> impl Iterator<Item = f32> {
    let h0 = h0.rem_euclid(1.0);
    (0..count).map(move |i| (h0 + i as f32 / count as f32).fract())
}
