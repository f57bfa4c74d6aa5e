//! Adapters Layer
//!
//! Implementations of the outbound ports.

pub mod saver;

pub use saver::{NavStackSaver, RECORD_TUPLE_LEN};
