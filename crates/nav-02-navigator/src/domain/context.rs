//! Read-only view handed to interceptors and listeners

use nav_01_backstack::{NavStackList, Screen};

use crate::ports::Navigator;

/// Snapshot of the navigator taken before an intent is evaluated.
///
/// Owned, so holders cannot reach back into the navigator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationContext<S> {
    current: Option<S>,
    back_stack: Vec<S>,
    nav_stack: Option<NavStackList<S>>,
}

impl<S: Screen> NavigationContext<S> {
    /// Capture the current state of `navigator`.
    pub fn capture<N: Navigator<S> + ?Sized>(navigator: &N) -> Self {
        Self {
            current: navigator.peek(),
            back_stack: navigator.peek_back_stack(),
            nav_stack: navigator.peek_nav_stack(),
        }
    }

    /// Context of a navigator with nothing on its stack.
    pub fn empty() -> Self {
        Self {
            current: None,
            back_stack: Vec::new(),
            nav_stack: None,
        }
    }

    pub fn peek(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Current screen followed by everything older, ending at root.
    pub fn peek_back_stack(&self) -> &[S] {
        &self.back_stack
    }

    pub fn peek_nav_stack(&self) -> Option<&NavStackList<S>> {
        self.nav_stack.as_ref()
    }
}
