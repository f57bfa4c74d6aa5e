//! Error types for the back-stack subsystem
//!
//! Boundary conditions (duplicate push, pop at root, moving past either end,
//! restoring a root with no snapshot) are NOT errors: they are reported
//! through `bool` / `Option` returns. Errors are reserved for broken inputs.

use thiserror::Error;

/// Errors that can occur in the back-stack subsystem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackStackError {
    #[error("Initial screens cannot be empty")]
    EmptyInitialScreens,

    #[error("Section {section} holds {len} values, not a whole number of {tuple}-value records")]
    Arity {
        section: usize,
        len: usize,
        tuple: usize,
    },

    #[error("Unexpected value in section {section} at position {position}: expected {expected}")]
    UnexpectedType {
        section: usize,
        position: usize,
        expected: &'static str,
    },

    #[error("Corrupt navigation state: {0}")]
    CorruptState(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
