use crate::{ApplicationContext, LifecycleAction, Signal};

pub(crate) type SignalHandler = fn(Signal, &mut ApplicationContext) -> LifecycleAction;

/// Maps lifecycle signals to handler functions. Handlers are plain function
/// pointers over `(signal, context)`, so a registry can be driven in tests
/// without a live host runtime.
#[derive(Debug, Default)]
pub(crate) struct SignalRegistry {
    entries: Vec<(Signal, SignalHandler)>,
}

impl SignalRegistry {
    pub(crate) fn subscribe(&mut self, signal: Signal, handler: SignalHandler) {
        self.entries.push((signal, handler));
    }

    /// Routes `signal` to the first handler subscribed for it. Signals
    /// without a subscription fall through to `LifecycleAction::None`.
    pub(crate) fn dispatch(
        &self,
        signal: Signal,
        context: &mut ApplicationContext,
    ) -> LifecycleAction {
        match self
            .entries
            .iter()
            .find(|(subscribed, _)| *subscribed == signal)
        {
            Some((_, handler)) => handler(signal, context),
            None => LifecycleAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApplicationState, PlatformIdentity, MAIN_WINDOW_CONFIG};

    fn test_context() -> ApplicationContext {
        ApplicationContext::new(PlatformIdentity::from_os_name("linux"), MAIN_WINDOW_CONFIG)
    }

    fn mark_ready(_signal: Signal, context: &mut ApplicationContext) -> LifecycleAction {
        context.state = ApplicationState::Ready;
        LifecycleAction::CreateMainWindow
    }

    fn request_exit(_signal: Signal, _context: &mut ApplicationContext) -> LifecycleAction {
        LifecycleAction::RequestExit
    }

    #[test]
    fn dispatch_without_subscription_returns_none() {
        let registry = SignalRegistry::default();
        let mut context = test_context();
        assert_eq!(
            registry.dispatch(Signal::RuntimeReady, &mut context),
            LifecycleAction::None
        );
        assert_eq!(context.state, ApplicationState::Idle);
    }

    #[test]
    fn dispatch_routes_to_the_subscribed_handler() {
        let mut registry = SignalRegistry::default();
        registry.subscribe(Signal::RuntimeReady, mark_ready);
        registry.subscribe(Signal::AllWindowsClosed, request_exit);

        let mut context = test_context();
        assert_eq!(
            registry.dispatch(Signal::RuntimeReady, &mut context),
            LifecycleAction::CreateMainWindow
        );
        assert_eq!(context.state, ApplicationState::Ready);
        assert_eq!(
            registry.dispatch(Signal::AllWindowsClosed, &mut context),
            LifecycleAction::RequestExit
        );
    }
}
