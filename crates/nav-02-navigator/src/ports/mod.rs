//! Ports Layer
//!
//! - `inbound`: the intent-level API the presentation layer drives
//! - `outbound`: interceptors, listeners and failure notifiers the chain calls

pub mod inbound;
pub mod outbound;

pub use inbound::Navigator;
pub use outbound::{FailureNotifier, NavigationEventListener, NavigationInterceptor};
