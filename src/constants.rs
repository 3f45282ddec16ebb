pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const ICON_FILE_NAME: &str = "icon.png";

pub const EXIT_HOTKEY: &str = "Ctrl+Alt+X";
pub const DEFAULT_DRAW_KEY: char = 'f';

/// Stroke width of a retracement line, in points.
pub const PEN_WIDTH: f32 = 1.5;
pub const DEFAULT_NEW_LEVEL_COLOR: &str = "#ffffff";

/// Label anchor relative to the left end of a line.
pub const LABEL_OFFSET_X: f64 = 5.0;
pub const LABEL_OFFSET_Y: f64 = -8.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;

pub const LEVEL_MIN: f64 = -100.0;
pub const LEVEL_MAX: f64 = 100.0;
pub const LEVEL_STEP: f64 = 0.001;
pub const LEVEL_DECIMALS: usize = 4;

pub const APP_TOOLTIP: &str = "Dokodemo Fib";
pub const MENU_SETTINGS: &str = "Settings";
pub const MENU_QUIT: &str = "Quit";
pub const DIALOG_TITLE: &str = "Advanced Settings";
pub const DIALOG_DRAW_KEY_LABEL: &str = "Draw key:";
pub const DIALOG_LEVELS_LABEL: &str = "Fibonacci levels:";
pub const DIALOG_ADD_LEVEL: &str = "Add level";
pub const DIALOG_DELETE_BTN: &str = "Delete";
pub const DIALOG_SAVE_BTN: &str = "Save";
pub const DIALOG_CANCEL_BTN: &str = "Cancel";
