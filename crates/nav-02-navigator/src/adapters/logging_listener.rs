//! Event listener that reports navigation through `tracing`

use tracing::info;

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};

use crate::domain::NavigationContext;
use crate::ports::NavigationEventListener;

/// Logs every intent and stack change at `info` under the `navigation`
/// target, using screen routes as names.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingNavigationEventListener;

impl LoggingNavigationEventListener {
    pub fn new() -> Self {
        Self
    }
}

fn routes<'a, S: Screen + 'a>(screens: impl Iterator<Item = &'a S>) -> String {
    screens.map(S::route).collect::<Vec<_>>().join(", ")
}

/// `[forward] current [backward]`, forward listed top first.
pub fn describe_nav_stack<S: Screen>(nav_stack: Option<&NavStackList<S>>) -> String {
    match nav_stack {
        Some(list) => {
            let mut forward: Vec<&S> = list.forward_items().collect();
            forward.reverse();
            format!(
                "[{}] {} [{}]",
                routes(forward.into_iter()),
                list.current().route(),
                routes(list.backward_items())
            )
        }
        None => "[] []".to_string(),
    }
}

impl<S: Screen> NavigationEventListener<S> for LoggingNavigationEventListener {
    fn go_to(&self, screen: &S, _context: &NavigationContext<S>) {
        info!(target: "navigation", route = %screen.route(), "go_to");
    }

    fn pop(&self, result: Option<&PopResult>, context: &NavigationContext<S>) {
        let route = context.peek().map(S::route).unwrap_or_default();
        info!(target: "navigation", route = %route, has_result = result.is_some(), "pop");
    }

    fn forward(&self, context: &NavigationContext<S>) {
        let route = context
            .peek_nav_stack()
            .and_then(|list| list.forward_items().next())
            .map(S::route)
            .unwrap_or_default();
        info!(target: "navigation", route = %route, "forward");
    }

    fn backward(&self, context: &NavigationContext<S>) {
        let route = context
            .peek_nav_stack()
            .and_then(|list| list.backward_items().next())
            .map(S::route)
            .unwrap_or_default();
        info!(target: "navigation", route = %route, "backward");
    }

    fn reset_root(&self, new_root: &S, options: StateOptions, _context: &NavigationContext<S>) {
        info!(
            target: "navigation",
            route = %new_root.route(),
            save = options.save,
            restore = options.restore,
            clear = options.clear,
            "reset_root"
        );
    }

    fn on_back_stack_changed(&self, back_stack: &[S]) {
        info!(target: "navigation", back_stack = %routes(back_stack.iter()), "back stack changed");
    }

    fn on_nav_stack_changed(&self, nav_stack: Option<&NavStackList<S>>) {
        info!(target: "navigation", nav_stack = %describe_nav_stack(nav_stack), "nav stack changed");
    }
}
