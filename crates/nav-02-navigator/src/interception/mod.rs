//! Interception chain
//!
//! Middleware over any `Navigator`: interceptors may consume, fail or
//! rewrite an intent before it reaches the delegate; listeners and a failure
//! notifier observe the outcome without being able to influence it.

pub mod navigator;

pub use navigator::{InterceptingNavigator, InterceptingNavigatorBuilder};
