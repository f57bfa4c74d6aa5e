//! Domain Layer - Pure navigation state
//!
//! This layer contains:
//! - Screen payload contract and root keys
//! - Records and their context tag-bag
//! - The NavStack state machine
//! - Immutable list views / saved snapshots
//! - Reset options
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No callbacks into application code

pub mod nav_stack;
pub mod nav_stack_list;
pub mod record;
pub mod screen;
pub mod state_options;

pub use nav_stack::{NavStack, RootSwitch};
pub use nav_stack_list::{NavStackList, SavedStack};
pub use record::{PopResult, Record, RecordContext, RecordKey, POP_RESULT_TAG};
pub use screen::{RootKey, Screen};
pub use state_options::StateOptions;
