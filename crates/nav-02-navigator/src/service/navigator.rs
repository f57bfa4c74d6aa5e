//! Navigator Service
//!
//! Translates intents into `NavStack` operations and owns the root-pop
//! escape hatch.
//!
//! ## Invariants
//!
//! - The wrapped stack is never empty: construction rejects an empty stack,
//!   and a pop with the cursor on the root goes to the root-pop handler
//!   instead of the stack.
//! - The lifecycle tracker, when attached, is synced after every mutation.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use nav_01_backstack::{
    NavStack, NavStackList, PopResult, Record, RecordLifecycle, Screen, StackSaver, StateOptions,
};

use crate::error::NavigatorError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::Navigator;

/// Host callback run when `pop` is called with the cursor on the root.
pub type RootPopHandler = Box<dyn FnMut(Option<PopResult>) + Send>;

/// The navigator over a single `NavStack`.
pub struct NavigatorImpl<S: Screen> {
    stack: NavStack<S>,
    on_root_pop: RootPopHandler,
    lifecycle: Option<RecordLifecycle>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: Screen> NavigatorImpl<S> {
    /// Wrap `stack`; fails with `EmptyStack` if it holds no record.
    pub fn new<F>(stack: NavStack<S>, on_root_pop: F) -> Result<Self, NavigatorError>
    where
        F: FnMut(Option<PopResult>) + Send + 'static,
    {
        if stack.is_empty() {
            return Err(NavigatorError::EmptyStack);
        }
        Ok(Self {
            stack,
            on_root_pop: Box::new(on_root_pop),
            lifecycle: None,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Resume from state produced by `saver`.
    ///
    /// Fails with `BackStack` when the saved state does not decode, and with
    /// `EmptyStack` when it decodes to an empty live stack.
    pub fn restore<T, F>(saver: &T, saved: T::Saved, on_root_pop: F) -> Result<Self, NavigatorError>
    where
        T: StackSaver<S>,
        F: FnMut(Option<PopResult>) + Send + 'static,
    {
        let stack = saver.restore(saved)?;
        debug!(len = stack.len(), index = stack.current_index(), "navigator restored");
        Self::new(stack, on_root_pop)
    }

    /// Attach a lifecycle tracker; it immediately sees the current state.
    pub fn with_lifecycle(mut self, mut lifecycle: RecordLifecycle) -> Self {
        lifecycle.sync(&self.stack);
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn stack(&self) -> &NavStack<S> {
        &self.stack
    }

    pub fn into_stack(self) -> NavStack<S> {
        self.stack
    }

    pub fn current_record(&self) -> Option<&Record<S>> {
        self.stack.current()
    }

    pub fn lifecycle(&self) -> Option<&RecordLifecycle> {
        self.lifecycle.as_ref()
    }

    pub fn lifecycle_mut(&mut self) -> Option<&mut RecordLifecycle> {
        self.lifecycle.as_mut()
    }

    /// Pop result waiting for the current screen, without consuming it.
    pub fn pending_result(&self) -> Option<PopResult> {
        self.stack.current().and_then(Record::pending_result)
    }

    /// Consume the pop result delivered to the current screen.
    pub fn take_result(&mut self) -> Option<PopResult> {
        self.stack.current_mut().and_then(Record::take_result)
    }

    fn sync_lifecycle(&mut self) {
        if let Some(lifecycle) = &mut self.lifecycle {
            lifecycle.sync(&self.stack);
        }
    }
}

impl<S: Screen> Navigator<S> for NavigatorImpl<S> {
    fn go_to(&mut self, screen: S) -> bool {
        let route = screen.route();
        let pushed = self.stack.push(screen);
        self.metrics.record_push(pushed);
        if pushed {
            debug!(route = %route, depth = self.stack.len(), "go_to");
            self.sync_lifecycle();
        } else {
            trace!(route = %route, "go_to ignored, already current");
        }
        pushed
    }

    fn pop(&mut self, result: Option<PopResult>) -> Option<S> {
        if self.stack.is_at_root() {
            debug!(has_result = result.is_some(), "pop at root");
            self.metrics.record_root_pop();
            (self.on_root_pop)(result);
            return None;
        }

        let popped = self.stack.pop()?;
        if let Some(result) = result {
            if let Some(current) = self.stack.current_mut() {
                current.attach_result(result);
            }
        }
        self.metrics.record_pop();
        self.sync_lifecycle();
        Some(popped.into_screen())
    }

    fn forward(&mut self) -> bool {
        let moved = self.stack.forward();
        if moved {
            self.metrics.record_forward();
            self.sync_lifecycle();
        }
        moved
    }

    fn backward(&mut self) -> bool {
        let moved = self.stack.backward();
        if moved {
            self.metrics.record_backward();
            self.sync_lifecycle();
        }
        moved
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        let switch = self.stack.switch_root(new_root, options);
        self.metrics.record_reset(switch.restored);
        self.sync_lifecycle();
        switch.previous
    }

    fn peek(&self) -> Option<S> {
        self.stack.current().map(|record| record.screen().clone())
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.stack
            .current()
            .into_iter()
            .chain(self.stack.backward_items())
            .map(|record| record.screen().clone())
            .collect()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        self.stack.screens_snapshot()
    }
}

impl<S: Screen> fmt::Debug for NavigatorImpl<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorImpl")
            .field("stack", &self.stack)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
