use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, SHELL_ROOT_ENV};

pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".voicedeck"))
}

fn shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    default_shell_root_dir()
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
        .join(file_name)
}

fn format_log_line(scope: &str, timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] [{scope}] {message}")
}

fn write_log_line(log_path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log file {}: {}", log_path.display(), error))?;
    writeln!(file, "{line}").map_err(|error| format!("Failed to append log line: {error}"))
}

fn append_log_line(scope: &str, message: &str) {
    let log_path = resolve_desktop_log_path(shell_root_dir(), DESKTOP_LOG_FILE);
    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string();
    let line = format_log_line(scope, &timestamp, message);
    if write_log_line(&log_path, &line).is_err() {
        eprintln!("{line}");
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_log_line("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log_line("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log_line("shutdown", message);
}
