//! Service Layer
//!
//! - `NavigatorImpl`: the navigator over one `NavStack`
//! - `SharedNavigator`: lock-per-operation handle for multi-threaded hosts

pub mod navigator;
pub mod shared;

pub use navigator::{NavigatorImpl, RootPopHandler};
pub use shared::SharedNavigator;
