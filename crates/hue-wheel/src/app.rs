//! Chooser application window.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use arboard::Clipboard;
use eframe::egui;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::color::{format_hex, parse_hex, Hsv, Palette, Rgb};
use crate::config::{self, AppState, ChooserSettings};
use crate::platform::open_file;
use crate::ui::{chrome, sliders, swatches, HueWheel, SvSquare, Toast};

/// Main application state.
pub struct WheelApp {
    hsv: Hsv,
    division: u32,
    reverse: bool,
    hex_input: String,
    hex_valid: bool,
    toast: Option<Toast>,
    toast_duration: Duration,
    wheel: HueWheel,
    sv_square: SvSquare,
    state: AppState,
    config_path: Option<PathBuf>,
    last_position: Option<egui::Pos2>,
    // Config hot-reload
    config_changed: Arc<AtomicBool>,
    #[allow(dead_code)]
    watcher: Option<RecommendedWatcher>,
}

impl WheelApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: ChooserSettings,
        config_path: Option<PathBuf>,
    ) -> Self {
        let state = AppState::load();

        // Restore saved window position
        if let Some(pos) = state.position() {
            cc.egui_ctx
                .send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        }

        // Last session's selection wins over the configured startup values
        let hex = state
            .color()
            .map(str::to_string)
            .unwrap_or_else(|| settings.initial_color.clone());
        let rgb = parse_hex(&hex).unwrap_or_else(|| {
            eprintln!("[warn] Invalid startup color '{}', using red", hex);
            Rgb::from_bytes([255, 0, 0])
        });
        let division = state
            .division()
            .unwrap_or_else(|| settings.clamped_division())
            .clamp(config::MIN_DIVISION, config::MAX_DIVISION);
        let reverse = state.reverse().unwrap_or(settings.reverse);

        // Watch the active config file so edits apply without a restart
        let config_changed = Arc::new(AtomicBool::new(false));
        let watcher = config_path.as_ref().and_then(|path| {
            let flag = config_changed.clone();
            let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
                if let Ok(event) = res {
                    // Ignore metadata-only changes
                    if !matches!(event.kind, notify::EventKind::Access(_)) {
                        flag.store(true, Ordering::SeqCst);
                    }
                }
            })
            .ok()?;
            watcher.watch(path, RecursiveMode::NonRecursive).ok()?;
            Some(watcher)
        });

        Self {
            hsv: rgb.to_hsv(),
            division,
            reverse,
            hex_input: format_hex(rgb),
            hex_valid: true,
            toast: None,
            toast_duration: Duration::from_millis(settings.toast_duration_ms),
            wheel: HueWheel::new(),
            sv_square: SvSquare::new(),
            state,
            config_path,
            last_position: None,
            config_changed,
            watcher,
        }
    }

    /// Rewrite the hex field from the current color.
    ///
    /// Skipped when the field already spells the same color, so typing
    /// lowercase hex is not fought over.
    fn sync_hex_input(&mut self) {
        let hex = format_hex(self.hsv.to_rgb());
        if !self.hex_input.eq_ignore_ascii_case(&hex) {
            self.hex_input = hex;
        }
        self.hex_valid = true;
    }

    /// Parse the hex field; invalid text only flags the field.
    fn apply_hex_input(&mut self) {
        match parse_hex(&self.hex_input) {
            Some(rgb) => {
                self.hex_valid = true;
                if rgb.to_bytes() != self.hsv.to_rgb().to_bytes() {
                    self.hsv = rgb.to_hsv();
                }
            }
            None => self.hex_valid = false,
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
            Ok(()) => {
                self.toast = Some(Toast::new(
                    format!("copy to clipboard \"{text}\""),
                    self.toast_duration,
                ));
            }
            Err(e) => {
                eprintln!("[warn] Clipboard error: {}", e);
                self.toast = Some(Toast::new("Clipboard unavailable", self.toast_duration));
            }
        }
    }

    /// Re-read the config file after an edit; the current color selection
    /// is kept, only chooser settings are re-applied.
    fn reload_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        let settings = config::read_config(&path).chooser;
        self.division = settings.clamped_division();
        self.reverse = settings.reverse;
        self.toast_duration = Duration::from_millis(settings.toast_duration_ms);
        self.toast = Some(Toast::new("Config reloaded", self.toast_duration));
    }

    /// Settings row: hex entry, division spinner, reverse, config shortcut.
    fn settings_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.monospace("RGB");
            let default_bg = ui.visuals().extreme_bg_color;
            if !self.hex_valid {
                ui.visuals_mut().extreme_bg_color = chrome::INVALID_INPUT_BG;
            }
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.hex_input)
                    .desired_width(64.0)
                    .font(egui::TextStyle::Monospace)
                    .char_limit(7),
            );
            ui.visuals_mut().extreme_bg_color = default_bg;
            if response.changed() {
                self.apply_hex_input();
            }

            ui.separator();
            ui.label("Division");
            ui.add(
                egui::DragValue::new(&mut self.division)
                    .range(config::MIN_DIVISION..=config::MAX_DIVISION),
            );
            ui.checkbox(&mut self.reverse, "Reverse");

            if let Some(path) = self.config_path.clone() {
                ui.separator();
                if ui.small_button("Config").on_hover_text(path.display().to_string()).clicked() {
                    open_file(&path);
                }
            }
        });
    }
}

impl eframe::App for WheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.config_changed.swap(false, Ordering::SeqCst) {
            self.reload_config();
        }

        // Track the outer position so on_exit can persist it
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.last_position = Some(rect.min);
        }

        let mut copied: Option<String> = None;
        let mut color_changed = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                color_changed |= self.wheel.show(ui, &mut self.hsv, self.division);

                ui.vertical(|ui| {
                    color_changed |= self.sv_square.show(ui, &mut self.hsv);
                    self.settings_row(ui);
                    color_changed |= sliders::color_sliders(ui, &mut self.hsv);
                });

                ui.separator();
                ui.vertical(|ui| {
                    let palette =
                        Palette::sample(self.hsv, self.division as usize, self.reverse);
                    copied = swatches::show(ui, &palette);
                });
            });
        });

        if color_changed {
            self.sync_hex_input();
        }
        if let Some(text) = copied {
            self.copy_to_clipboard(text);
        }
        let toast_expired = self.toast.as_ref().is_some_and(|toast| !toast.show(ctx));
        if toast_expired {
            self.toast = None;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(pos) = self.last_position {
            self.state.set_position(pos);
        }
        self.state
            .remember(format_hex(self.hsv.to_rgb()), self.division, self.reverse);
        self.state.save();
    }
}
