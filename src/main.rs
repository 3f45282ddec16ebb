use fib_overlay::constants::{APP_TOOLTIP, ICON_FILE_NAME};
use fib_overlay::controller::OverlayController;
use fib_overlay::gui::{tray, OverlayApp};
use fib_overlay::input_hook::InputHook;
use fib_overlay::settings::{load_with_logging, resolve_settings_path};

use eframe::egui;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let settings_path = resolve_settings_path()?;
    let settings = load_with_logging(&settings_path, None);
    tracing::info!(path = %settings_path.display(), hotkey = %settings.hotkey, "starting overlay");

    let icon = match tray::load_icon(&settings_path.with_file_name(ICON_FILE_NAME)) {
        Ok(icon) => Some(Arc::new(icon)),
        Err(err) => {
            tracing::warn!(?err, "running without application icon");
            None
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_TOOLTIP)
        .with_transparent(true)
        .with_decorations(false)
        .with_always_on_top()
        .with_mouse_passthrough(true)
        .with_fullscreen(true)
        .with_taskbar(false);
    if let Some(icon) = icon.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let (input_tx, input_rx) = std::sync::mpsc::channel();
    eframe::run_native(
        APP_TOOLTIP,
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let mut hook = InputHook::default();
            if let Err(err) = hook.start(input_tx, Arc::new(move || ctx.request_repaint())) {
                tracing::error!(?err, "failed to start input hook");
            }
            Box::new(OverlayApp::new(
                settings,
                settings_path,
                OverlayController::new(input_rx),
                hook,
                icon,
            ))
        }),
    )
    .map_err(|err| anyhow::anyhow!("run overlay event loop: {err}"))
}
