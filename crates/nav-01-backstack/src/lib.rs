//! # NAV-01 Back Stack
//!
//! Navigation history engine: an ordered stack of records with a movable
//! cursor and per-root saved snapshots for tab-style switching.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure navigation state, no I/O
//!   - `Screen` / `RootKey`: Opaque destination payloads
//!   - `Record`: Screen plus a stable key and a context tag-bag
//!   - `NavStack`: The history state machine
//!   - `NavStackList` / `SavedStack`: Immutable views and snapshots
//!   - `StateOptions`: Save / restore / clear flags for `reset_root`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `StackSaver`: Driven port for persistence
//!   - `RecordLifecycleObserver`: Driven port for record-scoped state owners
//!
//! - **Lifecycle Layer** (`lifecycle/`): Explicit attach/detach tracking
//!   - `RecordLifecycle`: Emits events from stack transitions
//!   - `RecordStore`: Record-scoped value arena
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `NavStackSaver`: Primitive-list (JSON) persistence
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `current_index < len` whenever the stack is non-empty
//! - **INVARIANT-2**: Record keys are unique within a stack
//! - **INVARIANT-3**: At most one saved snapshot per root screen
//! - **INVARIANT-4**: `restore(save(stack)) == stack`
//!
//! ## Usage Example
//!
//! ```ignore
//! use nav_01_backstack::{NavStack, StateOptions};
//!
//! let mut stack = NavStack::new(AppScreen::Inbox);
//! stack.push(AppScreen::Thread { id: 7 });
//!
//! // Switch tabs, keeping the inbox branch for later
//! stack.reset_root(AppScreen::Settings, StateOptions::SAVE_AND_RESTORE);
//! stack.reset_root(AppScreen::Inbox, StateOptions::SAVE_AND_RESTORE);
//! assert_eq!(stack.current().unwrap().screen(), &AppScreen::Thread { id: 7 });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod ports;

#[cfg(test)]
mod test_support;

// Re-exports
pub use adapters::{NavStackSaver, RECORD_TUPLE_LEN};
pub use domain::{
    NavStack, NavStackList, PopResult, Record, RecordContext, RecordKey, RootKey, RootSwitch,
    SavedStack, Screen, StateOptions, POP_RESULT_TAG,
};
pub use error::BackStackError;
pub use lifecycle::{RecordLifecycle, RecordStore};
pub use ports::{RecordLifecycleEvent, RecordLifecycleObserver, StackSaver};
