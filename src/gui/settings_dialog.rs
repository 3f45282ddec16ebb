use crate::constants::{
    DIALOG_ADD_LEVEL, DIALOG_CANCEL_BTN, DIALOG_DELETE_BTN, DIALOG_DRAW_KEY_LABEL,
    DIALOG_LEVELS_LABEL, DIALOG_SAVE_BTN, LEVEL_DECIMALS, LEVEL_MAX, LEVEL_MIN, LEVEL_STEP,
};
use crate::levels::{DrawKey, Level, Rgb};
use crate::settings::Settings;
use eframe::egui;

/// Accepts an empty string or exactly one alphanumeric character.
pub fn validate_hotkey_input(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => c.is_alphanumeric(),
        _ => false,
    }
}

/// Spinner semantics: clamp to the editable range and keep four decimals.
pub fn normalize_level(value: f64) -> f64 {
    let scale = 10f64.powi(LEVEL_DECIMALS as i32);
    (value.clamp(LEVEL_MIN, LEVEL_MAX) * scale).round() / scale
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelRow {
    pub enabled: bool,
    pub level: f64,
    pub color: Rgb,
}

impl From<&Level> for LevelRow {
    fn from(level: &Level) -> Self {
        Self {
            enabled: level.enabled,
            level: normalize_level(level.level),
            color: level.color,
        }
    }
}

impl LevelRow {
    pub fn to_level(&self) -> Level {
        Level::new(normalize_level(self.level), self.enabled, self.color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    Open,
    Saved { hotkey: DrawKey, levels: Vec<Level> },
    Cancelled,
}

/// Working copy of the settings while the dialog is open. Nothing here
/// reaches the live settings until the caller receives
/// [`DialogOutcome::Saved`].
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDialog {
    hotkey_text: String,
    rows: Vec<LevelRow>,
}

impl SettingsDialog {
    pub fn new(settings: &Settings) -> Self {
        Self {
            hotkey_text: settings.hotkey.to_string(),
            rows: settings.levels.iter().map(LevelRow::from).collect(),
        }
    }

    pub fn hotkey_text(&self) -> &str {
        &self.hotkey_text
    }

    /// Apply an edit to the draw-key field. Invalid edits are rejected and
    /// the previous text stays.
    pub fn set_hotkey_text(&mut self, text: &str) -> bool {
        if !validate_hotkey_input(text) {
            return false;
        }
        self.hotkey_text = text.to_owned();
        true
    }

    pub fn rows(&self) -> &[LevelRow] {
        &self.rows
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(LevelRow::from(&Level::default()));
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> Option<LevelRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn result(&self) -> (DrawKey, Vec<Level>) {
        let hotkey = DrawKey::from_input(&self.hotkey_text).unwrap_or_default();
        let levels = self.rows.iter().map(LevelRow::to_level).collect();
        (hotkey, levels)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> DialogOutcome {
        ui.horizontal(|ui| {
            ui.label(DIALOG_DRAW_KEY_LABEL);
            let mut text = self.hotkey_text.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .char_limit(1)
                    .desired_width(24.0),
            );
            if response.changed() {
                self.set_hotkey_text(&text);
            }
        });

        ui.separator();
        ui.label(DIALOG_LEVELS_LABEL);

        let mut remove = None;
        egui::ScrollArea::vertical()
            .max_height(320.0)
            .show(ui, |ui| {
                for (index, row) in self.rows.iter_mut().enumerate() {
                    ui.push_id(index, |ui| {
                        ui.horizontal(|ui| {
                            ui.checkbox(&mut row.enabled, "");
                            ui.add(
                                egui::DragValue::new(&mut row.level)
                                    .clamp_range(LEVEL_MIN..=LEVEL_MAX)
                                    .speed(LEVEL_STEP)
                                    .fixed_decimals(LEVEL_DECIMALS),
                            );
                            let mut rgb = row.color.to_array();
                            if ui.color_edit_button_srgb(&mut rgb).changed() {
                                row.color = Rgb::from_array(rgb);
                            }
                            if ui.button(DIALOG_DELETE_BTN).clicked() {
                                remove = Some(index);
                            }
                        });
                    });
                }
            });
        if let Some(index) = remove {
            self.remove_row(index);
        }

        if ui.button(DIALOG_ADD_LEVEL).clicked() {
            self.add_row();
        }

        ui.separator();
        let mut outcome = DialogOutcome::Open;
        ui.horizontal(|ui| {
            if ui.button(DIALOG_SAVE_BTN).clicked() {
                let (hotkey, levels) = self.result();
                outcome = DialogOutcome::Saved { hotkey, levels };
            }
            if ui.button(DIALOG_CANCEL_BTN).clicked() {
                outcome = DialogOutcome::Cancelled;
            }
        });
        outcome
    }
}
