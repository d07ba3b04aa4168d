//! Configuration: file loading, types, persisted state.

mod state;
mod types;

pub use state::AppState;
pub use types::{ChooserSettings, Config, MAX_DIVISION, MIN_DIVISION};

use std::path::{Path, PathBuf};

/// Project-local config file name, checked in the working directory.
pub const LOCAL_CONFIG: &str = "hue-wheel.toml";

/// Global config path: `<config_dir>/hue-wheel/config.toml`.
pub fn global_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hue-wheel")
        .join("config.toml")
}

/// Load the configuration. A local `hue-wheel.toml` beats the global file.
///
/// Returns the config and the path it was read from (None when no file
/// exists and defaults are in effect).
pub fn load() -> (Config, Option<PathBuf>) {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return (read_config(&local), Some(local));
    }
    let global = global_config_path();
    if global.exists() {
        return (read_config(&global), Some(global));
    }
    (Config::default(), None)
}

/// Read and parse one config file; unreadable or invalid files degrade to
/// defaults with a warning.
pub fn read_config(path: &Path) -> Config {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("[warn] Failed to read {}: {}", path.display(), e);
            return Config::default();
        }
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[warn] Failed to parse {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Commented example config written by `--init` / `--init-global`.
pub fn example_config() -> &'static str {
    r##"# Hue Wheel configuration
# Global config: ~/.config/hue-wheel/config.toml
# Local override: ./hue-wheel.toml (in working directory)

[chooser]
initial_color = "FF0000"   # Startup color (six-digit hex, "#" optional)
division = 12              # Palette size (2 - 360)
reverse = false            # Reverse palette iteration order
toast_duration_ms = 2000   # Copy confirmation duration
"##
}
