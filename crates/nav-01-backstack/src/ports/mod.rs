//! Ports Layer
//!
//! Defines the interfaces (traits) for collaborators that persist a stack or
//! react to its transitions without being able to change them.

pub mod outbound;

pub use outbound::{RecordLifecycleEvent, RecordLifecycleObserver, StackSaver};
