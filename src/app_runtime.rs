use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events, main_window, LifecycleAction, ShellState,
    Signal, DESKTOP_LOG_FILE, MAIN_WINDOW_CONFIG, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::logging::default_shell_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .manage(ShellState::default())
        .setup(|app| {
            let app_handle = app.handle().clone();
            let state = app_handle.state::<ShellState>();
            if let Some(context) = state.context_snapshot() {
                append_startup_log(&format!(
                    "platform identity: {}",
                    context.platform.os_name()
                ));
            }

            let action = state.dispatch(Signal::RuntimeReady);
            append_startup_log(&format!(
                "lifecycle signal {} answered {}",
                Signal::RuntimeReady.as_str(),
                action.as_str()
            ));
            if action != LifecycleAction::CreateMainWindow {
                return Ok(());
            }

            main_window::create_main_window(&app_handle, &MAIN_WINDOW_CONFIG).map_err(|error| {
                append_startup_log(&format!("fatal startup failure: {error}"));
                error
            })?;

            state.dispatch(Signal::WindowCreated);
            append_startup_log("main window open; shell startup complete");
            Ok(())
        })
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { .. } = event {
                append_desktop_log("main window close requested");
            }
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { api, code, .. } => {
                exit_events::handle_exit_requested(app_handle, &api, code);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            _ => {}
        });
}
