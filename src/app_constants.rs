use crate::{ContentIsolation, WindowConfig};

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "VoiceDeck";

/// Document resource the main window loads, relative to the bundled
/// frontend directory.
pub(crate) const START_PAGE: &str = "index.html";

/// Fixed main-window geometry and content posture. The bundled page is
/// trusted local content and drives the shell through the host bridge, so
/// it runs unisolated.
pub(crate) const MAIN_WINDOW_CONFIG: WindowConfig = WindowConfig {
    width: 700,
    height: 520,
    content_isolation: ContentIsolation::Unisolated,
};

pub(crate) const SHELL_ROOT_ENV: &str = "VOICEDECK_ROOT";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
