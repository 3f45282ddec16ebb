pub mod overlay;
pub mod settings_dialog;
pub mod tray;

use crate::constants::{APP_TOOLTIP, DIALOG_TITLE};
use crate::controller::OverlayController;
use crate::input_hook::InputHook;
use crate::messages::{PumpOutcome, TrayAction};
use crate::render::{retracement_lines, LevelLine};
use crate::settings::Settings;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;

pub use overlay::{paint_lines, HookUnits, ScreenMapping};
pub use settings_dialog::{DialogOutcome, SettingsDialog};
pub use tray::TrayMenu;

pub struct OverlayApp {
    settings: Settings,
    settings_path: PathBuf,
    controller: OverlayController,
    hook: InputHook,
    dialog: Option<SettingsDialog>,
    icon: Option<Arc<egui::IconData>>,
    exiting: bool,
}

impl OverlayApp {
    pub fn new(
        settings: Settings,
        settings_path: PathBuf,
        controller: OverlayController,
        hook: InputHook,
        icon: Option<Arc<egui::IconData>>,
    ) -> Self {
        Self {
            settings,
            settings_path,
            controller,
            hook,
            dialog: None,
            icon,
            exiting: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn controller(&self) -> &OverlayController {
        &self.controller
    }

    pub fn dialog(&self) -> Option<&SettingsDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut SettingsDialog> {
        self.dialog.as_mut()
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Drain pending hook events into the selection.
    pub fn process_input(&mut self) -> PumpOutcome {
        let outcome = self.controller.pump(self.settings.hotkey);
        if outcome.exit {
            self.request_exit();
        }
        outcome
    }

    pub fn lines(&self) -> Vec<LevelLine> {
        let selection = self.controller.selection();
        if !selection.phase().has_line() {
            return Vec::new();
        }
        retracement_lines(selection.start(), selection.end(), &self.settings.levels)
    }

    pub fn open_settings_dialog(&mut self) {
        if self.dialog.is_none() {
            tracing::debug!("opening settings dialog");
            self.dialog = Some(SettingsDialog::new(&self.settings));
        }
    }

    pub fn apply_dialog_outcome(&mut self, outcome: DialogOutcome) {
        match outcome {
            DialogOutcome::Open => {}
            DialogOutcome::Cancelled => {
                tracing::debug!("settings dialog cancelled");
                self.dialog = None;
            }
            DialogOutcome::Saved { hotkey, levels } => {
                self.settings.update(hotkey, levels);
                if let Err(err) = self.settings.save(&self.settings_path) {
                    tracing::error!(?err, "failed to save settings");
                }
                self.dialog = None;
            }
        }
    }

    pub fn handle_tray_action(&mut self, action: TrayAction) {
        match action {
            TrayAction::OpenSettings => self.open_settings_dialog(),
            TrayAction::Quit => self.request_exit(),
        }
    }

    fn request_exit(&mut self) {
        if !self.exiting {
            tracing::info!("shutting down overlay");
        }
        self.hook.stop();
        self.exiting = true;
    }

    fn show_tray(&mut self, ctx: &egui::Context) {
        let mut builder = egui::ViewportBuilder::default()
            .with_title(APP_TOOLTIP)
            .with_inner_size([160.0, 72.0])
            .with_resizable(false)
            .with_always_on_top();
        if let Some(icon) = self.icon.clone() {
            builder = builder.with_icon(icon);
        }

        let action = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("tray_panel"),
            builder,
            |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
                }
                egui::CentralPanel::default()
                    .show(ctx, |ui| TrayMenu::ui(ui))
                    .inner
            },
        );
        if let Some(action) = action {
            self.handle_tray_action(action);
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        let mut builder = egui::ViewportBuilder::default()
            .with_title(DIALOG_TITLE)
            .with_inner_size([380.0, 480.0])
            .with_min_inner_size([350.0, 240.0])
            .with_always_on_top();
        if let Some(icon) = self.icon.clone() {
            builder = builder.with_icon(icon);
        }

        let outcome = ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("settings_dialog"),
            builder,
            |ctx, _class| {
                if ctx.input(|i| i.viewport().close_requested()) {
                    return DialogOutcome::Cancelled;
                }
                egui::CentralPanel::default()
                    .show(ctx, |ui| dialog.ui(ui))
                    .inner
            },
        );
        self.apply_dialog_outcome(outcome);
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_input();
        if self.exiting {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mapping = ScreenMapping::from_context(ctx);
        let lines = self.lines();
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| paint_lines(ui.painter(), &lines, &mapping));

        self.show_tray(ctx);
        self.show_dialog(ctx);
    }
}
