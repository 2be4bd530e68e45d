use std::sync::Mutex;

use crate::{
    lifecycle_signals, ApplicationContext, LifecycleAction, PlatformIdentity, Signal,
    SignalRegistry, MAIN_WINDOW_CONFIG,
};

/// Managed shell state: the lifecycle context behind its mutex plus the
/// signal registry that drives it. The runtime adapter is the only writer,
/// always on the runtime's own dispatch thread.
#[derive(Debug)]
pub(crate) struct ShellState {
    context: Mutex<ApplicationContext>,
    registry: SignalRegistry,
}

impl ShellState {
    pub(crate) fn with_platform(platform: PlatformIdentity) -> Self {
        Self {
            context: Mutex::new(ApplicationContext::new(platform, MAIN_WINDOW_CONFIG)),
            registry: lifecycle_signals::wire_lifecycle_handlers(),
        }
    }

    /// Routes one host signal through the registry against the shared
    /// context. A poisoned context lock leaves the runtime untouched.
    pub(crate) fn dispatch(&self, signal: Signal) -> LifecycleAction {
        match self.context.lock() {
            Ok(mut context) => self.registry.dispatch(signal, &mut context),
            Err(_) => LifecycleAction::None,
        }
    }

    pub(crate) fn context_snapshot(&self) -> Option<ApplicationContext> {
        self.context.lock().ok().map(|context| *context)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::with_platform(PlatformIdentity::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApplicationState;

    #[test]
    fn runtime_ready_is_dispatched_into_exactly_one_window_request() {
        let state = ShellState::with_platform(PlatformIdentity::from_os_name("linux"));
        assert_eq!(
            state.dispatch(Signal::RuntimeReady),
            LifecycleAction::CreateMainWindow
        );
        assert_eq!(state.dispatch(Signal::RuntimeReady), LifecycleAction::None);
    }

    #[test]
    fn window_requests_carry_the_fixed_config_unmodified() {
        let state = ShellState::with_platform(PlatformIdentity::from_os_name("linux"));
        state.dispatch(Signal::RuntimeReady);

        let context = state.context_snapshot().expect("context snapshot");
        assert_eq!(context.window_config, MAIN_WINDOW_CONFIG);
        assert_eq!(context.window_config.width, 700);
        assert_eq!(context.window_config.height, 520);
    }

    #[test]
    fn full_session_on_a_non_resident_platform_requests_exit_once() {
        let state = ShellState::with_platform(PlatformIdentity::from_os_name("windows"));
        assert_eq!(
            state.dispatch(Signal::RuntimeReady),
            LifecycleAction::CreateMainWindow
        );
        assert_eq!(state.dispatch(Signal::WindowCreated), LifecycleAction::None);
        assert_eq!(
            state.dispatch(Signal::AllWindowsClosed),
            LifecycleAction::RequestExit
        );
        assert_eq!(
            state.dispatch(Signal::AllWindowsClosed),
            LifecycleAction::None
        );

        let context = state.context_snapshot().expect("context snapshot");
        assert_eq!(context.state, ApplicationState::Terminating);
    }

    #[test]
    fn full_session_on_the_resident_platform_stays_alive_without_windows() {
        let state = ShellState::with_platform(PlatformIdentity::from_os_name("macos"));
        assert_eq!(
            state.dispatch(Signal::RuntimeReady),
            LifecycleAction::CreateMainWindow
        );
        assert_eq!(state.dispatch(Signal::WindowCreated), LifecycleAction::None);
        assert_eq!(
            state.dispatch(Signal::AllWindowsClosed),
            LifecycleAction::None
        );

        let context = state.context_snapshot().expect("context snapshot");
        assert!(!context.is_terminating());
        assert_eq!(context.open_windows, 0);
    }
}
