//! Domain Layer - Navigator configuration, intents and their outcomes
//!
//! RULES:
//! - No I/O operations
//! - No references back into a navigator

pub mod config;
pub mod context;
pub mod intercept;

pub use config::{NavigatorConfig, NavigatorConfigBuilder, DEFAULT_MAX_REWRITES};
pub use context::NavigationContext;
pub use intercept::{InterceptFailure, InterceptedResult, NavIntent};
