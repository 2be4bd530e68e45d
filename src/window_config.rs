use serde::Serialize;

/// Runs ahead of any page script in an isolated window and strips the host
/// bridge globals, so loaded content cannot reach the runtime's privileged
/// surface.
const BRIDGE_LOCKDOWN_SCRIPT: &str = r#"
(function () {
  try {
    delete window.__TAURI__;
    delete window.__TAURI_INTERNALS__;
  } catch (_) {
    window.__TAURI__ = undefined;
    window.__TAURI_INTERNALS__ = undefined;
  }
})();
"#;

/// Whether content loaded into a window may talk to the host bridge.
/// Callers pick a posture explicitly; there is no silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ContentIsolation {
    Isolated,
    Unisolated,
}

impl ContentIsolation {
    pub(crate) fn bridge_lockdown_script(self) -> Option<&'static str> {
        match self {
            ContentIsolation::Isolated => Some(BRIDGE_LOCKDOWN_SCRIPT),
            ContentIsolation::Unisolated => None,
        }
    }
}

/// Fixed main-window configuration. Set at compile time and never mutated
/// once the shell is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct WindowConfig {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) content_isolation: ContentIsolation,
}

impl WindowConfig {
    pub(crate) fn logical_size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }
}
