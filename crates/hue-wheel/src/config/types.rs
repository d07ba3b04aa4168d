//! Configuration types for the chooser.

use serde::Deserialize;

/// Smallest selectable palette division.
pub const MIN_DIVISION: u32 = 2;
/// Largest selectable palette division (one hue per degree).
pub const MAX_DIVISION: u32 = 360;

/// Main configuration structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chooser: ChooserSettings,
}

/// Startup settings for the chooser window.
#[derive(Debug, Deserialize, Clone)]
pub struct ChooserSettings {
    /// Startup color as six-digit hex, `#` optional.
    #[serde(default = "default_initial_color")]
    pub initial_color: String,
    /// Palette size.
    #[serde(default = "default_division")]
    pub division: u32,
    /// Reverse palette iteration order.
    #[serde(default)]
    pub reverse: bool,
    /// How long the copy confirmation stays on screen.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_initial_color() -> String {
    "FF0000".to_string()
}

fn default_division() -> u32 {
    12
}

fn default_toast_duration_ms() -> u64 {
    2000
}

impl Default for ChooserSettings {
    fn default() -> Self {
        Self {
            initial_color: default_initial_color(),
            division: default_division(),
            reverse: false,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl ChooserSettings {
    /// Division forced into the selectable range.
    pub fn clamped_division(&self) -> u32 {
        self.division.clamp(MIN_DIVISION, MAX_DIVISION)
    }
}
