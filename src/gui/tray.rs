use crate::constants::{MENU_QUIT, MENU_SETTINGS};
use crate::messages::TrayAction;
use anyhow::{Context, Result};
use eframe::egui;
use std::path::Path;

pub struct TrayMenu;

impl TrayMenu {
    pub fn entries() -> [(&'static str, TrayAction); 2] {
        [
            (MENU_SETTINGS, TrayAction::OpenSettings),
            (MENU_QUIT, TrayAction::Quit),
        ]
    }

    pub fn ui(ui: &mut egui::Ui) -> Option<TrayAction> {
        let mut picked = None;
        ui.vertical_centered_justified(|ui| {
            for (label, action) in Self::entries() {
                if ui.button(label).clicked() {
                    picked = Some(action);
                }
            }
        });
        picked
    }
}

/// Decode the application icon for the viewport and tray panel.
pub fn load_icon(path: &Path) -> Result<egui::IconData> {
    let image = image::open(path)
        .with_context(|| format!("load icon {}", path.display()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_settings_then_quit() {
        let entries = TrayMenu::entries();
        assert_eq!(entries[0].1, TrayAction::OpenSettings);
        assert_eq!(entries[1].1, TrayAction::Quit);
    }

    #[test]
    fn icon_is_decoded_to_rgba() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("icon.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("write png");

        let icon = load_icon(&path).expect("load icon");
        assert_eq!((icon.width, icon.height), (3, 2));
        assert_eq!(&icon.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_icon_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(load_icon(&dir.path().join("missing.png")).is_err());
    }
}
