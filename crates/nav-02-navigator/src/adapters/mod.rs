//! Adapters Layer
//!
//! Concrete collaborators for the outbound ports.

pub mod logging_listener;

pub use logging_listener::{describe_nav_stack, LoggingNavigationEventListener};
