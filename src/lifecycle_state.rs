use crate::{PlatformIdentity, WindowConfig};

/// Process-level lifecycle phase. Transitions are driven exclusively by the
/// host runtime signals routed through the signal registry; the state never
/// moves backwards from `WindowOpen` to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApplicationState {
    Idle,
    Ready,
    WindowOpen,
    Terminating,
}

/// Everything the lifecycle handlers are allowed to read or write. Owned by
/// the managed shell state and passed in explicitly, so handlers see no
/// ambient process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ApplicationContext {
    pub(crate) state: ApplicationState,
    pub(crate) platform: PlatformIdentity,
    pub(crate) window_config: WindowConfig,
    pub(crate) open_windows: u32,
}

impl ApplicationContext {
    pub(crate) fn new(platform: PlatformIdentity, window_config: WindowConfig) -> Self {
        Self {
            state: ApplicationState::Idle,
            platform,
            window_config,
            open_windows: 0,
        }
    }

    pub(crate) fn is_terminating(&self) -> bool {
        self.state == ApplicationState::Terminating
    }
}
