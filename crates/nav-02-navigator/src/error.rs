//! Error types for the navigator subsystem

use nav_01_backstack::BackStackError;
use thiserror::Error;

/// Errors that can occur in the navigator subsystem
///
/// Rejected intents (duplicate `go_to`, boundary moves, intercepted calls) are
/// not errors; they surface as `false` / `None` / empty returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("Navigator requires a non-empty stack")]
    EmptyStack,

    #[error("Invalid navigator configuration: {0}")]
    InvalidConfig(String),

    #[error("Back stack error: {0}")]
    BackStack(#[from] BackStackError),
}
