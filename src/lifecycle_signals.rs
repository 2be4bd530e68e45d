use crate::{ApplicationContext, ApplicationState, SignalRegistry};

/// Host runtime signals the shell consumes. `RuntimeReady` fires exactly
/// once after the runtime finishes its own initialization;
/// `AllWindowsClosed` fires when the open-window count reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    RuntimeReady,
    WindowCreated,
    AllWindowsClosed,
}

impl Signal {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Signal::RuntimeReady => "runtime-ready",
            Signal::WindowCreated => "window-created",
            Signal::AllWindowsClosed => "all-windows-closed",
        }
    }
}

/// What the shell asks of the host runtime in response to a signal.
/// `None` leaves the runtime alone; on all-windows-closed that means the
/// process stays resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleAction {
    CreateMainWindow,
    RequestExit,
    None,
}

impl LifecycleAction {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LifecycleAction::CreateMainWindow => "create-main-window",
            LifecycleAction::RequestExit => "request-exit",
            LifecycleAction::None => "none",
        }
    }
}

pub(crate) fn on_runtime_ready(
    _signal: Signal,
    context: &mut ApplicationContext,
) -> LifecycleAction {
    if context.state != ApplicationState::Idle {
        return LifecycleAction::None;
    }

    context.state = ApplicationState::Ready;
    LifecycleAction::CreateMainWindow
}

pub(crate) fn on_window_created(
    _signal: Signal,
    context: &mut ApplicationContext,
) -> LifecycleAction {
    if context.state != ApplicationState::Ready {
        return LifecycleAction::None;
    }

    context.state = ApplicationState::WindowOpen;
    context.open_windows += 1;
    LifecycleAction::None
}

pub(crate) fn on_all_windows_closed(
    _signal: Signal,
    context: &mut ApplicationContext,
) -> LifecycleAction {
    context.open_windows = 0;
    if context.is_terminating() {
        return LifecycleAction::None;
    }
    if context.platform.stays_resident_without_windows() {
        return LifecycleAction::None;
    }

    context.state = ApplicationState::Terminating;
    LifecycleAction::RequestExit
}

pub(crate) fn wire_lifecycle_handlers() -> SignalRegistry {
    let mut registry = SignalRegistry::default();
    registry.subscribe(Signal::RuntimeReady, on_runtime_ready);
    registry.subscribe(Signal::WindowCreated, on_window_created);
    registry.subscribe(Signal::AllWindowsClosed, on_all_windows_closed);
    registry
}
