//! Interception outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// The navigation intents an interceptor can see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavIntent {
    GoTo,
    Pop,
    Forward,
    Backward,
    ResetRoot,
}

impl NavIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIntent::GoTo => "go_to",
            NavIntent::Pop => "pop",
            NavIntent::Forward => "forward",
            NavIntent::Backward => "backward",
            NavIntent::ResetRoot => "reset_root",
        }
    }

    /// Whether `InterceptedResult::Rewrite` applies to this intent.
    pub fn accepts_rewrite(&self) -> bool {
        matches!(self, NavIntent::GoTo | NavIntent::ResetRoot)
    }
}

impl fmt::Display for NavIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an interceptor could not honour an intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptFailure {
    /// When true the intent is suppressed; otherwise it still reaches the
    /// navigator as a fallback.
    pub consumed: bool,
    pub reason: Option<String>,
}

impl InterceptFailure {
    pub fn new(consumed: bool) -> Self {
        Self {
            consumed,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for InterceptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{} (consumed: {})", reason, self.consumed),
            None => write!(f, "no reason given (consumed: {})", self.consumed),
        }
    }
}

/// Verdict of one interceptor on one intent.
///
/// The first non-`Skipped` verdict in the chain wins, except `Rewrite`,
/// which restarts the chain with the new target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterceptedResult<S> {
    /// Defer to the next interceptor.
    Skipped,
    /// Handled outside the navigator; stop here.
    SuccessConsumed,
    /// Replace the target screen and evaluate the intent again.
    Rewrite(S),
    /// The intent could not be honoured.
    Failure(InterceptFailure),
}

impl<S> InterceptedResult<S> {
    pub fn failure(consumed: bool) -> Self {
        Self::Failure(InterceptFailure::new(consumed))
    }

    pub fn failure_with_reason(consumed: bool, reason: impl Into<String>) -> Self {
        Self::Failure(InterceptFailure::new(consumed).with_reason(reason))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

impl<S> Default for InterceptedResult<S> {
    fn default() -> Self {
        Self::Skipped
    }
}
