use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{append_shutdown_log, LifecycleAction, ShellState, Signal};

/// An exit request with no explicit code means the open-window count just
/// reached zero. Explicitly requested exits pass through untouched.
pub(crate) fn handle_exit_requested(
    app_handle: &AppHandle,
    api: &ExitRequestApi,
    code: Option<i32>,
) {
    if code.is_some() {
        return;
    }

    let state = app_handle.state::<ShellState>();
    match state.dispatch(Signal::AllWindowsClosed) {
        LifecycleAction::RequestExit => {
            append_shutdown_log("all windows closed; terminating desktop process");
        }
        _ => {
            append_shutdown_log("all windows closed; staying resident without windows");
            api.prevent_exit();
        }
    }
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    if let Some(context) = state.context_snapshot() {
        append_shutdown_log(&format!(
            "desktop process exiting in state {:?} with {} open windows",
            context.state, context.open_windows
        ));
    }
}
