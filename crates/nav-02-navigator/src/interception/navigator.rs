//! Intercepting navigator
//!
//! ## Evaluation
//!
//! ```text
//! intent ──► interceptor 1 ──► interceptor 2 ──► ... ──► listeners ──► delegate
//!              │ Skipped: next
//!              │ SuccessConsumed: stop, delegate not called
//!              │ Failure(consumed): notify, stop
//!              │ Failure(not consumed): notify, go straight to delegate
//!              └ Rewrite(screen): restart at interceptor 1 with the new target
//! ```
//!
//! ## Invariants
//!
//! - Listeners and notifiers only ever see owned snapshots.
//! - Rewrites per intent are capped by `NavigatorConfig::max_rewrites`;
//!   hitting the cap drops the intent and reports a consumed failure.
//! - Change callbacks fire after an intent only if the delegate's stack
//!   actually changed.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};

use crate::domain::{
    InterceptFailure, InterceptedResult, NavIntent, NavigationContext, NavigatorConfig,
};
use crate::error::NavigatorError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{FailureNotifier, NavigationEventListener, NavigationInterceptor, Navigator};

/// How the chain settled an intent.
enum Verdict<T, S> {
    /// Hand `T` to the delegate.
    Proceed(T, NavigationContext<S>),
    /// An interceptor handled it.
    Handled,
    /// An interceptor rejected it, or the rewrite cap was hit.
    Rejected,
}

/// Navigator middleware: interceptors, listeners and a failure notifier
/// around a delegate navigator.
pub struct InterceptingNavigator<S: Screen, N> {
    delegate: N,
    interceptors: Vec<Box<dyn NavigationInterceptor<S>>>,
    listeners: Vec<Box<dyn NavigationEventListener<S>>>,
    notifier: Option<Box<dyn FailureNotifier>>,
    config: NavigatorConfig,
    metrics: Arc<dyn MetricsRecorder>,
    last_back_stack: Vec<S>,
    last_nav_stack: Option<NavStackList<S>>,
}

impl<S: Screen, N: Navigator<S>> InterceptingNavigator<S, N> {
    pub fn builder(delegate: N) -> InterceptingNavigatorBuilder<S, N> {
        InterceptingNavigatorBuilder::new(delegate)
    }

    pub fn delegate(&self) -> &N {
        &self.delegate
    }

    /// Direct access to the delegate. Calls made through it bypass the chain.
    pub fn delegate_mut(&mut self) -> &mut N {
        &mut self.delegate
    }

    pub fn into_delegate(self) -> N {
        self.delegate
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Run the chain for one intent.
    ///
    /// `ask` queries one interceptor about `target`; `rewrite` builds the next
    /// target from a rewritten screen, or returns `None` when the intent has
    /// no screen to rewrite.
    fn evaluate<T>(
        &mut self,
        intent: NavIntent,
        mut target: T,
        mut ask: impl FnMut(
            &mut dyn NavigationInterceptor<S>,
            &T,
            &NavigationContext<S>,
        ) -> InterceptedResult<S>,
        rewrite: impl Fn(S, &T) -> Option<T>,
    ) -> Verdict<T, S> {
        let mut rewrites = 0usize;
        'restart: loop {
            let context = NavigationContext::capture(&self.delegate);
            for (position, interceptor) in self.interceptors.iter_mut().enumerate() {
                match ask(interceptor.as_mut(), &target, &context) {
                    InterceptedResult::Skipped => continue,
                    InterceptedResult::SuccessConsumed => {
                        debug!(intent = %intent, interceptor = position, "intent consumed by interceptor");
                        self.metrics.record_intercepted();
                        return Verdict::Handled;
                    }
                    InterceptedResult::Failure(failure) => {
                        warn!(
                            intent = %intent,
                            interceptor = position,
                            consumed = failure.consumed,
                            reason = failure.reason.as_deref().unwrap_or(""),
                            "interceptor failure"
                        );
                        self.metrics.record_interceptor_failure();
                        notify(self.notifier.as_deref(), intent, &failure);
                        if failure.consumed {
                            return Verdict::Rejected;
                        }
                        return Verdict::Proceed(target, context);
                    }
                    InterceptedResult::Rewrite(screen) => {
                        let Some(next) = rewrite(screen, &target) else {
                            trace!(intent = %intent, interceptor = position, "rewrite ignored for intent");
                            continue;
                        };
                        rewrites += 1;
                        if rewrites > self.config.max_rewrites {
                            let failure = InterceptFailure::new(true).with_reason(format!(
                                "rewrite limit of {} exceeded",
                                self.config.max_rewrites
                            ));
                            warn!(intent = %intent, depth = rewrites, "rewrite limit exceeded, dropping intent");
                            self.metrics.record_interceptor_failure();
                            notify(self.notifier.as_deref(), intent, &failure);
                            return Verdict::Rejected;
                        }
                        debug!(intent = %intent, interceptor = position, depth = rewrites, "intent rewritten");
                        self.metrics.record_rewrite();
                        target = next;
                        continue 'restart;
                    }
                }
            }
            return Verdict::Proceed(target, context);
        }
    }

    /// Tell listeners about stack changes since the last report.
    fn publish_changes(&mut self) {
        let back_stack = self.delegate.peek_back_stack();
        if back_stack != self.last_back_stack {
            for listener in &self.listeners {
                listener.on_back_stack_changed(&back_stack);
            }
            self.last_back_stack = back_stack;
        }
        let nav_stack = self.delegate.peek_nav_stack();
        if nav_stack != self.last_nav_stack {
            for listener in &self.listeners {
                listener.on_nav_stack_changed(nav_stack.as_ref());
            }
            self.last_nav_stack = nav_stack;
        }
    }

    fn publish_initial(&mut self) {
        for listener in &self.listeners {
            listener.on_back_stack_changed(&self.last_back_stack);
            listener.on_nav_stack_changed(self.last_nav_stack.as_ref());
        }
    }
}

fn notify(notifier: Option<&dyn FailureNotifier>, intent: NavIntent, failure: &InterceptFailure) {
    let Some(notifier) = notifier else {
        return;
    };
    match intent {
        NavIntent::GoTo => notifier.go_to_failure(failure),
        NavIntent::Pop => notifier.pop_failure(failure),
        NavIntent::Forward => notifier.forward_failure(failure),
        NavIntent::Backward => notifier.backward_failure(failure),
        NavIntent::ResetRoot => notifier.reset_root_failure(failure),
    }
}

impl<S: Screen, N: Navigator<S>> Navigator<S> for InterceptingNavigator<S, N> {
    fn go_to(&mut self, screen: S) -> bool {
        let verdict = self.evaluate(
            NavIntent::GoTo,
            screen,
            |interceptor, screen, context| interceptor.go_to(screen, context),
            |rewritten, _| Some(rewritten),
        );
        match verdict {
            Verdict::Proceed(screen, context) => {
                for listener in &self.listeners {
                    listener.go_to(&screen, &context);
                }
                let moved = self.delegate.go_to(screen);
                self.publish_changes();
                moved
            }
            Verdict::Handled => true,
            Verdict::Rejected => false,
        }
    }

    fn pop(&mut self, result: Option<PopResult>) -> Option<S> {
        let verdict = self.evaluate(
            NavIntent::Pop,
            result,
            |interceptor, result, context| interceptor.pop(result.as_ref(), context),
            |_, _| None,
        );
        match verdict {
            Verdict::Proceed(result, context) => {
                for listener in &self.listeners {
                    listener.pop(result.as_ref(), &context);
                }
                let popped = self.delegate.pop(result);
                self.publish_changes();
                popped
            }
            Verdict::Handled | Verdict::Rejected => None,
        }
    }

    fn forward(&mut self) -> bool {
        let verdict = self.evaluate(
            NavIntent::Forward,
            (),
            |interceptor, _, context| interceptor.forward(context),
            |_, _| None,
        );
        match verdict {
            Verdict::Proceed((), context) => {
                for listener in &self.listeners {
                    listener.forward(&context);
                }
                let moved = self.delegate.forward();
                self.publish_changes();
                moved
            }
            Verdict::Handled => true,
            Verdict::Rejected => false,
        }
    }

    fn backward(&mut self) -> bool {
        let verdict = self.evaluate(
            NavIntent::Backward,
            (),
            |interceptor, _, context| interceptor.backward(context),
            |_, _| None,
        );
        match verdict {
            Verdict::Proceed((), context) => {
                for listener in &self.listeners {
                    listener.backward(&context);
                }
                let moved = self.delegate.backward();
                self.publish_changes();
                moved
            }
            Verdict::Handled => true,
            Verdict::Rejected => false,
        }
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        let verdict = self.evaluate(
            NavIntent::ResetRoot,
            (new_root, options),
            |interceptor, (new_root, options), context| {
                interceptor.reset_root(new_root, *options, context)
            },
            |rewritten, (_, options)| Some((rewritten, *options)),
        );
        match verdict {
            Verdict::Proceed((new_root, options), context) => {
                for listener in &self.listeners {
                    listener.reset_root(&new_root, options, &context);
                }
                let previous = self.delegate.reset_root(new_root, options);
                self.publish_changes();
                previous
            }
            Verdict::Handled | Verdict::Rejected => Vec::new(),
        }
    }

    fn peek(&self) -> Option<S> {
        self.delegate.peek()
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.delegate.peek_back_stack()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        self.delegate.peek_nav_stack()
    }
}

impl<S: Screen, N: fmt::Debug> fmt::Debug for InterceptingNavigator<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptingNavigator")
            .field("delegate", &self.delegate)
            .field("interceptors", &self.interceptors.len())
            .field("listeners", &self.listeners.len())
            .field("notifier", &self.notifier.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for InterceptingNavigator
///
/// # Example
///
/// ```ignore
/// let navigator = InterceptingNavigator::builder(delegate)
///     .interceptor(AuthInterceptor::default())
///     .listener(LoggingNavigationEventListener::new())
///     .notifier(ToastNotifier)
///     .build()?;
/// ```
pub struct InterceptingNavigatorBuilder<S: Screen, N> {
    delegate: N,
    interceptors: Vec<Box<dyn NavigationInterceptor<S>>>,
    listeners: Vec<Box<dyn NavigationEventListener<S>>>,
    notifier: Option<Box<dyn FailureNotifier>>,
    config: NavigatorConfig,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: Screen, N: Navigator<S>> InterceptingNavigatorBuilder<S, N> {
    pub fn new(delegate: N) -> Self {
        Self {
            delegate,
            interceptors: Vec::new(),
            listeners: Vec::new(),
            notifier: None,
            config: NavigatorConfig::default(),
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Append an interceptor; earlier interceptors are asked first.
    pub fn interceptor(mut self, interceptor: impl NavigationInterceptor<S> + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    pub fn listener(mut self, listener: impl NavigationEventListener<S> + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn notifier(mut self, notifier: impl FailureNotifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Validate the configuration and assemble the chain.
    ///
    /// With `notify_initial_back_stack`, listeners see the starting stack
    /// before this returns.
    pub fn build(self) -> Result<InterceptingNavigator<S, N>, NavigatorError> {
        self.config.validate()?;
        let last_back_stack = self.delegate.peek_back_stack();
        let last_nav_stack = self.delegate.peek_nav_stack();
        let mut navigator = InterceptingNavigator {
            delegate: self.delegate,
            interceptors: self.interceptors,
            listeners: self.listeners,
            notifier: self.notifier,
            config: self.config,
            metrics: self.metrics,
            last_back_stack,
            last_nav_stack,
        };
        if navigator.config.notify_initial_back_stack {
            navigator.publish_initial();
        }
        Ok(navigator)
    }
}
