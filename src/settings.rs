use crate::constants::SETTINGS_FILE_NAME;
use crate::levels::{default_levels, DrawKey, Level};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Character that, while held, drags a new retracement.
    #[serde(default)]
    pub hotkey: DrawKey,
    /// Levels in draw order. A document without this field draws nothing.
    #[serde(default)]
    pub levels: Vec<Level>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey: DrawKey::default(),
            levels: default_levels(),
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, substituting the defaults when the file is
    /// missing or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::or_defaults(Self::try_load(path), path)
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))
    }

    /// Resolve a [`Settings::try_load`] result, logging the fallback.
    pub fn or_defaults(loaded: Result<Self>, path: &Path) -> Self {
        match loaded {
            Ok(settings) => {
                tracing::debug!(
                    path = %path.display(),
                    levels = settings.levels.len(),
                    "loaded settings"
                );
                settings
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), ?err, "using default settings");
                Self::default()
            }
        }
    }

    /// Overwrite `path` with the settings as indented JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create settings parent folder {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved settings");
        Ok(())
    }

    pub fn update(&mut self, hotkey: DrawKey, levels: Vec<Level>) {
        tracing::debug!(%hotkey, levels = levels.len(), "settings updated");
        self.hotkey = hotkey;
        self.levels = levels;
    }

    pub fn enabled_levels(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(|level| level.enabled)
    }
}

/// Startup sequence: read the file, install the logger with the flag it
/// carries, then report how the load went through that logger.
pub fn load_with_logging(path: &Path, log_file: Option<PathBuf>) -> Settings {
    let loaded = Settings::try_load(path);
    let debug = loaded.as_ref().is_ok_and(|settings| settings.debug_logging);
    crate::logging::init(debug, log_file);
    Settings::or_defaults(loaded, path)
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Rgb;

    #[test]
    fn settings_path_is_resolved_next_to_executable() {
        let exe = Path::new("/opt/fib/bin/fib_overlay");
        let path = settings_path_from_exe_path(exe).expect("path");
        assert_eq!(path, Path::new("/opt/fib/bin").join(SETTINGS_FILE_NAME));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = Settings::load(dir.path().join(SETTINGS_FILE_NAME));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn empty_hotkey_in_file_falls_back_to_default_key() {
        let loaded: Settings = serde_json::from_value(serde_json::json!({
            "hotkey": "",
            "levels": [{ "level": 0.5, "enabled": true, "color": "#20b2aa" }]
        }))
        .expect("deserialize");
        assert_eq!(loaded.hotkey, DrawKey::default());
        assert_eq!(loaded.levels, vec![Level::new(0.5, true, Rgb::new(0x20, 0xb2, 0xaa))]);
    }

    #[test]
    fn missing_levels_field_means_no_levels() {
        let loaded: Settings =
            serde_json::from_value(serde_json::json!({ "hotkey": "g" })).expect("deserialize");
        assert_eq!(loaded.hotkey.as_char(), 'g');
        assert!(loaded.levels.is_empty());
    }

    #[test]
    fn debug_logging_is_omitted_while_disabled() {
        let value = serde_json::to_value(Settings::default()).expect("serialize");
        assert!(value.get("debug_logging").is_none());
        assert_eq!(value["hotkey"], "f");
        assert_eq!(value["levels"][1]["color"], "#ff0000");
    }

    #[test]
    fn update_replaces_key_and_levels() {
        let mut settings = Settings::default();
        let key = DrawKey::from_input("q").expect("key");
        settings.update(key, Vec::new());
        assert_eq!(settings.hotkey, key);
        assert!(settings.levels.is_empty());
        assert_eq!(settings.enabled_levels().count(), 0);
    }
}
