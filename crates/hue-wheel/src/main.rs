//! Hue Wheel - hue-circle color chooser
//!
//! Features:
//! - Pick a color on a hue/saturation disc or a saturation/value square
//! - Linked HSV/RGB sliders and a hex entry field
//! - Palette of N evenly spaced hues, copyable as hex or decimal
//! - Config hot-reload and last-selection persistence
//!
//! Usage:
//!   hue-wheel [--init | --init-global]

use std::path::PathBuf;

use eframe::egui;

use hue_wheel::app::WheelApp;
use hue_wheel::config;

const WINDOW_SIZE: [f32; 2] = [1064.0, 575.0];

fn main() -> eframe::Result<()> {
    let local_config_path = PathBuf::from(config::LOCAL_CONFIG);
    let global_config_path = config::global_config_path();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--init" => {
                if local_config_path.exists() {
                    eprintln!("Config already exists: {}", local_config_path.display());
                    std::process::exit(1);
                }
                std::fs::write(&local_config_path, config::example_config())
                    .expect("Failed to write config");
                println!("Created local config: {}", local_config_path.display());
                std::process::exit(0);
            }
            "--init-global" => {
                if let Some(parent) = global_config_path.parent() {
                    std::fs::create_dir_all(parent).ok();
                }
                std::fs::write(&global_config_path, config::example_config())
                    .expect("Failed to write config");
                println!("Created global config: {}", global_config_path.display());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Usage: hue-wheel [OPTIONS]");
                println!();
                println!("Options:");
                println!("      --init           Create local config (./hue-wheel.toml)");
                println!("      --init-global    Create/reset global config");
                println!("  -h, --help           Show this help");
                std::process::exit(0);
            }
            other => {
                eprintln!("[warn] Unknown option: {}", other);
            }
        }
    }

    let (config, config_path) = config::load();
    let settings = config.chooser;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Hue Wheel"),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        "Hue Wheel",
        options,
        Box::new(move |cc| Ok(Box::new(WheelApp::new(cc, settings, config_path)))),
    )
}
