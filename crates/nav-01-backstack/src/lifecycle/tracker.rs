//! Lifecycle tracker driven by stack transitions

use std::collections::HashSet;
use std::fmt;
use tracing::trace;

use crate::domain::{NavStack, RecordKey, Screen};
use crate::ports::{RecordLifecycleEvent, RecordLifecycleObserver};

/// Turns successive stack states into record lifecycle events.
///
/// Call `sync` after every mutation of the stack it follows. The first call
/// activates the current record of the initial state.
#[derive(Default)]
pub struct RecordLifecycle {
    observers: Vec<Box<dyn RecordLifecycleObserver>>,
    active: Option<RecordKey>,
    retained: HashSet<RecordKey>,
}

impl RecordLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it sees every event emitted from now on.
    pub fn register(&mut self, observer: impl RecordLifecycleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Key of the record last seen as current.
    pub fn active(&self) -> Option<&RecordKey> {
        self.active.as_ref()
    }

    /// Whether `key` was retained by the last synced state.
    pub fn is_retained(&self, key: &RecordKey) -> bool {
        self.retained.contains(key)
    }

    /// Diff `stack` against the last synced state and notify observers.
    ///
    /// Event order: `Deactivated(old)`, `Activated(new)`, then `Released` for
    /// every key that disappeared, in key order.
    pub fn sync<S: Screen>(&mut self, stack: &NavStack<S>) -> Vec<RecordLifecycleEvent> {
        let active = stack.current().map(|record| record.key().clone());
        let retained = stack.retained_keys();

        let mut events = Vec::new();
        if active != self.active {
            if let Some(previous) = self.active.take() {
                events.push(RecordLifecycleEvent::Deactivated(previous));
            }
            if let Some(next) = &active {
                events.push(RecordLifecycleEvent::Activated(next.clone()));
            }
        }
        let mut released: Vec<RecordKey> = self.retained.difference(&retained).cloned().collect();
        released.sort();
        events.extend(released.into_iter().map(RecordLifecycleEvent::Released));

        self.active = active;
        self.retained = retained;

        for event in &events {
            trace!(?event, "record lifecycle event");
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }
        events
    }
}

impl fmt::Debug for RecordLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordLifecycle")
            .field("observers", &self.observers.len())
            .field("active", &self.active)
            .field("retained", &self.retained.len())
            .finish()
    }
}
