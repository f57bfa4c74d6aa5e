//! Outbound Ports (Driven Ports)
//!
//! Collaborators called by `InterceptingNavigator`. None of them receives a
//! handle to the navigator; they only see owned `NavigationContext` snapshots.

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};

use crate::domain::{InterceptFailure, InterceptedResult, NavigationContext};

/// Middleware evaluated before an intent reaches the navigator.
///
/// Every method defaults to `Skipped`, so implementors only override the
/// intents they care about.
pub trait NavigationInterceptor<S: Screen>: Send {
    fn go_to(&mut self, _screen: &S, _context: &NavigationContext<S>) -> InterceptedResult<S> {
        InterceptedResult::Skipped
    }

    fn pop(
        &mut self,
        _result: Option<&PopResult>,
        _context: &NavigationContext<S>,
    ) -> InterceptedResult<S> {
        InterceptedResult::Skipped
    }

    fn forward(&mut self, _context: &NavigationContext<S>) -> InterceptedResult<S> {
        InterceptedResult::Skipped
    }

    fn backward(&mut self, _context: &NavigationContext<S>) -> InterceptedResult<S> {
        InterceptedResult::Skipped
    }

    fn reset_root(
        &mut self,
        _new_root: &S,
        _options: StateOptions,
        _context: &NavigationContext<S>,
    ) -> InterceptedResult<S> {
        InterceptedResult::Skipped
    }
}

/// Passive observer of navigation intents and stack changes.
///
/// Intent callbacks fire only when the intent reaches the navigator, just
/// before it runs. Change callbacks fire after any change to the stack.
pub trait NavigationEventListener<S: Screen>: Send {
    fn go_to(&self, _screen: &S, _context: &NavigationContext<S>) {}

    fn pop(&self, _result: Option<&PopResult>, _context: &NavigationContext<S>) {}

    fn forward(&self, _context: &NavigationContext<S>) {}

    fn backward(&self, _context: &NavigationContext<S>) {}

    fn reset_root(&self, _new_root: &S, _options: StateOptions, _context: &NavigationContext<S>) {}

    /// Current screen followed by everything older, ending at root.
    fn on_back_stack_changed(&self, _back_stack: &[S]) {}

    fn on_nav_stack_changed(&self, _nav_stack: Option<&NavStackList<S>>) {}
}

/// Receives interceptor failures, consumed or not.
pub trait FailureNotifier: Send {
    fn go_to_failure(&self, _failure: &InterceptFailure) {}

    fn pop_failure(&self, _failure: &InterceptFailure) {}

    fn forward_failure(&self, _failure: &InterceptFailure) {}

    fn backward_failure(&self, _failure: &InterceptFailure) {}

    fn reset_root_failure(&self, _failure: &InterceptFailure) {}
}
