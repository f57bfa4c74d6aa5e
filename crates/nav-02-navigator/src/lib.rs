//! # NAV-02 Navigator
//!
//! Intent-level navigation over a `NavStack`, with an optional interception
//! chain for rewriting, consuming or failing intents.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Configuration and intent outcomes
//!   - `NavigatorConfig` / `NavigatorConfigBuilder`: Validated chain settings
//!   - `NavigationContext`: Owned snapshot handed to interceptors
//!   - `InterceptedResult` / `InterceptFailure` / `NavIntent`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `Navigator`: Driving port (inbound API)
//!   - `NavigationInterceptor`, `NavigationEventListener`, `FailureNotifier`:
//!     Driven ports called by the chain
//!
//! - **Service Layer** (`service/`)
//!   - `NavigatorImpl`: The navigator over one stack, owns the root-pop hook
//!   - `SharedNavigator`: One lock region per operation
//!
//! - **Interception Layer** (`interception/`)
//!   - `InterceptingNavigator`: Middleware over any `Navigator`
//!
//! - **Adapters Layer** (`adapters/`)
//!   - `LoggingNavigationEventListener`: `tracing` output for every event
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: A `NavigatorImpl` never holds an empty stack
//! - **INVARIANT-2**: The first non-`Skipped` interceptor verdict wins
//! - **INVARIANT-3**: Rewrites per intent never exceed `max_rewrites`
//! - **INVARIANT-4**: Listeners cannot influence navigation
//!
//! ## Usage Example
//!
//! ```ignore
//! use nav_02_navigator::{
//!     InterceptingNavigator, LoggingNavigationEventListener, Navigator, NavigatorImpl,
//! };
//! use nav_01_backstack::NavStack;
//!
//! let delegate = NavigatorImpl::new(NavStack::new(AppScreen::Inbox), |_| exit_app())?;
//! let mut navigator = InterceptingNavigator::builder(delegate)
//!     .interceptor(RequireLogin)
//!     .listener(LoggingNavigationEventListener::new())
//!     .build()?;
//!
//! navigator.go_to(AppScreen::Thread { id: 7 });
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod interception;
pub mod metrics;
pub mod ports;
pub mod service;

#[cfg(test)]
mod test_support;

// Re-exports
pub use adapters::{describe_nav_stack, LoggingNavigationEventListener};
pub use domain::{
    InterceptFailure, InterceptedResult, NavIntent, NavigationContext, NavigatorConfig,
    NavigatorConfigBuilder, DEFAULT_MAX_REWRITES,
};
pub use error::NavigatorError;
pub use interception::{InterceptingNavigator, InterceptingNavigatorBuilder};
pub use metrics::{MetricsRecorder, MetricsSnapshot, NavigationMetrics, NoOpMetrics};
pub use ports::{FailureNotifier, NavigationEventListener, NavigationInterceptor, Navigator};
pub use service::{NavigatorImpl, RootPopHandler, SharedNavigator};

pub use nav_01_backstack::{NavStackList, PopResult, Screen, StateOptions};
