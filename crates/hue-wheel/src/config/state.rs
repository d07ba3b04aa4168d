//! Application state persistence.

use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Persistent application state: window position and the last selection.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppState {
    position: Option<[f32; 2]>,
    color: Option<String>,
    division: Option<u32>,
    reverse: Option<bool>,
}

impl AppState {
    /// Load state from disk.
    pub fn load() -> Self {
        let state_path = Self::state_path();
        if state_path.exists() {
            std::fs::read_to_string(&state_path)
                .ok()
                .and_then(|s| toml::from_str(&s).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save state to disk, best effort.
    pub fn save(&self) {
        let state_path = Self::state_path();
        if let Some(parent) = state_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        if let Ok(content) = toml::to_string_pretty(self) {
            std::fs::write(&state_path, content).ok();
        }
    }

    /// Get the state file path.
    fn state_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hue-wheel")
            .join("state.toml")
    }

    /// Saved window position, if any.
    pub fn position(&self) -> Option<egui::Pos2> {
        self.position.map(|p| egui::pos2(p[0], p[1]))
    }

    pub fn set_position(&mut self, pos: egui::Pos2) {
        self.position = Some([pos.x, pos.y]);
    }

    /// Last selected color as hex, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn division(&self) -> Option<u32> {
        self.division
    }

    pub fn reverse(&self) -> Option<bool> {
        self.reverse
    }

    /// Record the current selection for the next run.
    pub fn remember(&mut self, color: String, division: u32, reverse: bool) {
        self.color = Some(color);
        self.division = Some(division);
        self.reverse = Some(reverse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip() {
        let mut state = AppState::default();
        state.set_position(egui::pos2(120.0, 48.0));
        state.remember("00FF7F".to_string(), 24, true);

        let text = toml::to_string_pretty(&state).unwrap();
        let loaded: AppState = toml::from_str(&text).unwrap();

        assert_eq!(loaded.position(), Some(egui::pos2(120.0, 48.0)));
        assert_eq!(loaded.color(), Some("00FF7F"));
        assert_eq!(loaded.division(), Some(24));
        assert_eq!(loaded.reverse(), Some(true));
    }

    #[test]
    fn empty_state_has_no_values() {
        let state: AppState = toml::from_str("").unwrap();
        assert_eq!(state.position(), None);
        assert_eq!(state.color(), None);
        assert_eq!(state.division(), None);
        assert_eq!(state.reverse(), None);
    }
}
