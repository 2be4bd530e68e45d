use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{append_desktop_log, WindowConfig, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, START_PAGE};

/// Materializes the single main window from the fixed configuration and
/// points it at the bundled start page. The returned handle stays owned by
/// the host runtime; the shell never stores it.
pub(crate) fn create_main_window(
    app_handle: &AppHandle,
    config: &WindowConfig,
) -> Result<WebviewWindow, String> {
    let (width, height) = config.logical_size();
    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(START_PAGE.into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(width, height);

    if let Some(script) = config.content_isolation.bridge_lockdown_script() {
        builder = builder.initialization_script(script);
    }

    let window = builder.build().map_err(|error| {
        format!(
            "Failed to create main window {}x{} for {}: {}",
            config.width, config.height, START_PAGE, error
        )
    })?;

    append_desktop_log(&format!(
        "main window created with config {}",
        serde_json::to_string(config).unwrap_or_else(|_| "<unserializable>".to_string())
    ));
    Ok(window)
}
