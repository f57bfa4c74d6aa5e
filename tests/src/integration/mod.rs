//! # Integration Tests
//!
//! Flows that cross the back-stack, navigator and telemetry crates.

pub mod scenarios;
pub mod tab_switching;
