#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod exit_events;
mod lifecycle_signals;
mod lifecycle_state;
mod logging;
mod main_window;
mod platform_identity;
mod signal_registry;
mod window_config;

pub(crate) use app_constants::*;
pub(crate) use app_types::ShellState;
pub(crate) use lifecycle_signals::{LifecycleAction, Signal};
pub(crate) use lifecycle_state::{ApplicationContext, ApplicationState};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use platform_identity::PlatformIdentity;
pub(crate) use signal_registry::SignalRegistry;
pub(crate) use window_config::{ContentIsolation, WindowConfig};

fn main() {
    app_runtime::run();
}
