//! Thread-safe navigator handle
//!
//! Every public operation takes the lock once for its whole duration, so a
//! multi-step intent such as `reset_root` is never observed half-applied.

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};

use crate::ports::Navigator;

/// Cloneable handle sharing one navigator across threads.
#[derive(Debug)]
pub struct SharedNavigator<N> {
    inner: Arc<Mutex<N>>,
}

impl<N> Clone for SharedNavigator<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N> SharedNavigator<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            inner: Arc::new(Mutex::new(navigator)),
        }
    }

    /// Run several calls under a single lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut N) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn lock(&self) -> MutexGuard<'_, N> {
        self.inner.lock()
    }
}

impl<S: Screen, N: Navigator<S>> Navigator<S> for SharedNavigator<N> {
    fn go_to(&mut self, screen: S) -> bool {
        self.inner.lock().go_to(screen)
    }

    fn pop(&mut self, result: Option<PopResult>) -> Option<S> {
        self.inner.lock().pop(result)
    }

    fn forward(&mut self) -> bool {
        self.inner.lock().forward()
    }

    fn backward(&mut self) -> bool {
        self.inner.lock().backward()
    }

    fn reset_root(&mut self, new_root: S, options: StateOptions) -> Vec<S> {
        self.inner.lock().reset_root(new_root, options)
    }

    fn peek(&self) -> Option<S> {
        self.inner.lock().peek()
    }

    fn peek_back_stack(&self) -> Vec<S> {
        self.inner.lock().peek_back_stack()
    }

    fn peek_nav_stack(&self) -> Option<NavStackList<S>> {
        self.inner.lock().peek_nav_stack()
    }
}
