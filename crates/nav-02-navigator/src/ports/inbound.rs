//! Inbound Ports (Driving Ports)
//!
//! The intent-level API used by the rest of the application.

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};

/// Primary navigation API (Driving Port)
///
/// Implemented by `NavigatorImpl`, `InterceptingNavigator` and
/// `SharedNavigator`, so they nest freely.
pub trait Navigator<S: Screen> {
    /// Navigate to `screen`. `false` means the intent was ignored (duplicate of
    /// the current screen, or intercepted).
    fn go_to(&mut self, screen: S) -> bool;

    /// Pop the current screen, handing `result` to the screen below.
    ///
    /// At the root the host's root-pop handler runs instead and `None` is
    /// returned.
    fn pop(&mut self, result: Option<PopResult>) -> Option<S>;

    /// Move the cursor toward the top without discarding anything.
    fn forward(&mut self) -> bool;

    /// Move the cursor toward the root without discarding anything.
    fn backward(&mut self) -> bool;

    /// Replace the whole stack with `new_root`. Returns the previous screens,
    /// top to root.
    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S>;

    /// Current screen.
    fn peek(&self) -> Option<S>;

    /// Current screen followed by everything older, ending at root.
    fn peek_back_stack(&self) -> Vec<S>;

    /// Full view of the stack including forward history.
    fn peek_nav_stack(&self) -> Option<NavStackList<S>>;
}
