//! Arena of values scoped to records

use std::collections::HashMap;
use tracing::debug;

use crate::domain::RecordKey;
use crate::ports::{RecordLifecycleEvent, RecordLifecycleObserver};

/// Per-record values owned on behalf of the records' lifetimes.
///
/// Entries are dropped on `release`, which `RecordLifecycleEvent::Released`
/// triggers when the store is registered with a `RecordLifecycle`.
#[derive(Debug)]
pub struct RecordStore<T> {
    values: HashMap<RecordKey, T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<T> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, created with `init` on first access.
    pub fn get_or_insert_with(&mut self, key: &RecordKey, init: impl FnOnce() -> T) -> &mut T {
        self.values.entry(key.clone()).or_insert_with(init)
    }

    pub fn insert(&mut self, key: RecordKey, value: T) -> Option<T> {
        self.values.insert(key, value)
    }

    pub fn get(&self, key: &RecordKey) -> Option<&T> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &RecordKey) -> Option<&mut T> {
        self.values.get_mut(key)
    }

    pub fn contains(&self, key: &RecordKey) -> bool {
        self.values.contains_key(key)
    }

    /// Drop the value scoped to `key`.
    pub fn release(&mut self, key: &RecordKey) -> Option<T> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.values.keys()
    }
}

impl<T: Send> RecordLifecycleObserver for RecordStore<T> {
    fn on_event(&mut self, event: &RecordLifecycleEvent) {
        if let RecordLifecycleEvent::Released(key) = event {
            if self.release(key).is_some() {
                debug!(key = %key, "released record-scoped value");
            }
        }
    }
}
