//! Outbound Ports (Driven Ports)
//!
//! Persistence of a whole stack goes through `StackSaver`; the default
//! adapter is `adapters::NavStackSaver`.
//!
//! State owners that scope storage to a record (presenter state, retained
//! values, view models) subscribe here instead of relying on drop order or
//! weak references.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::domain::{NavStack, RecordKey, Screen};
use crate::error::BackStackError;

/// A change in a record's lifetime, derived from a stack transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordLifecycleEvent {
    /// The record became current.
    Activated(RecordKey),
    /// The record stopped being current but is still held.
    Deactivated(RecordKey),
    /// The record is gone from the live stack and every saved snapshot.
    /// Anything scoped to it must be dropped.
    Released(RecordKey),
}

impl RecordLifecycleEvent {
    pub fn key(&self) -> &RecordKey {
        match self {
            Self::Activated(key) | Self::Deactivated(key) | Self::Released(key) => key,
        }
    }
}

/// Receives record lifecycle events (Driven Port).
pub trait RecordLifecycleObserver: Send {
    fn on_event(&mut self, event: &RecordLifecycleEvent);
}

/// Lets an observer stay reachable by its owner while registered.
impl<O: RecordLifecycleObserver> RecordLifecycleObserver for Arc<Mutex<O>> {
    fn on_event(&mut self, event: &RecordLifecycleEvent) {
        self.lock().on_event(event);
    }
}

/// Persistence boundary for a whole stack (Driven Port).
///
/// `restore(save(stack))` must yield a stack with the same entries, cursor
/// and saved snapshots. Malformed input is an error, never a partial stack.
pub trait StackSaver<S: Screen> {
    type Saved;

    fn save(&self, stack: &NavStack<S>) -> Result<Self::Saved, BackStackError>;

    fn restore(&self, saved: Self::Saved) -> Result<NavStack<S>, BackStackError>;
}
