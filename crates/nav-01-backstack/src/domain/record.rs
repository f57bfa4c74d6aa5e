//! Records: identity-bearing entries of the navigation history
//!
//! INVARIANTS:
//! - A record's key never changes once created.
//! - Keys are unique within a stack at any point in time.
//!
//! External state owners scope their per-record storage by `RecordKey`
//! (see `lifecycle::RecordStore`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use super::screen::Screen;

/// Context tag holding a result delivered by a pop from the screen above.
pub const POP_RESULT_TAG: &str = "waypoint.pop_result";

/// Unique, immutable identity of a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result handed back to a screen when the screen above it is popped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopResult(Value);

impl PopResult {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// Encode any serializable value as a pop result.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self)
    }

    /// Decode the result into the type the destination expects.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Free-form tag bag attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordContext(BTreeMap<String, Value>);

impl RecordContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(tag.into(), value.into())
    }

    pub fn get(&self, tag: &str) -> Option<&Value> {
        self.0.get(tag)
    }

    pub fn remove(&mut self, tag: &str) -> Option<Value> {
        self.0.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Flatten into a JSON object.
    pub fn to_object(&self) -> serde_json::Map<String, Value> {
        self.0
            .iter()
            .map(|(tag, value)| (tag.clone(), value.clone()))
            .collect()
    }
}

impl From<serde_json::Map<String, Value>> for RecordContext {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// One entry in the navigation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<S> {
    key: RecordKey,
    screen: S,
    route: String,
    context: RecordContext,
}

impl<S: Screen> Record<S> {
    /// Create a record with a freshly generated key.
    pub fn new(screen: S) -> Self {
        Self::with_key(screen, RecordKey::generate())
    }

    /// Create a record with a known key (restoration, tests).
    pub fn with_key(screen: S, key: RecordKey) -> Self {
        let route = screen.route();
        Self {
            key,
            screen,
            route,
            context: RecordContext::new(),
        }
    }

    /// Reassemble a record from persisted parts.
    pub fn from_parts(key: RecordKey, screen: S, route: String, context: RecordContext) -> Self {
        Self {
            key,
            screen,
            route,
            context,
        }
    }
}

impl<S> Record<S> {
    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn context(&self) -> &RecordContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RecordContext {
        &mut self.context
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Attach a pop result for this record's screen to consume.
    ///
    /// A result that was never consumed is overwritten.
    pub fn attach_result(&mut self, result: PopResult) {
        self.context.insert(POP_RESULT_TAG, result.into_value());
    }

    /// Peek at the pending pop result without consuming it.
    pub fn pending_result(&self) -> Option<PopResult> {
        self.context.get(POP_RESULT_TAG).cloned().map(PopResult)
    }

    /// Consume the pending pop result; a second call returns `None`.
    pub fn take_result(&mut self) -> Option<PopResult> {
        self.context.remove(POP_RESULT_TAG).map(PopResult)
    }
}
