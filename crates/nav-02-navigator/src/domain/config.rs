//! Navigator configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use nav_02_navigator::domain::NavigatorConfigBuilder;
//!
//! let config = NavigatorConfigBuilder::new()
//!     .max_rewrites(4)
//!     .notify_initial_back_stack(false)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NavigatorError;

/// Default cap on rewrites applied to a single intent.
pub const DEFAULT_MAX_REWRITES: usize = 16;

/// Interception chain configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Rewrites allowed per intent before it is dropped (at least 1)
    pub max_rewrites: usize,
    /// Report the initial back stack to listeners when the chain is built
    pub notify_initial_back_stack: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_rewrites: DEFAULT_MAX_REWRITES,
            notify_initial_back_stack: true,
        }
    }
}

impl NavigatorConfig {
    /// Create a new configuration with validation
    pub fn new(max_rewrites: usize, notify_initial_back_stack: bool) -> Result<Self, NavigatorError> {
        let config = Self {
            max_rewrites,
            notify_initial_back_stack,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), NavigatorError> {
        if self.max_rewrites == 0 {
            return Err(NavigatorError::InvalidConfig(
                "max_rewrites must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for NavigatorConfig with validation
#[derive(Debug, Default)]
pub struct NavigatorConfigBuilder {
    max_rewrites: Option<usize>,
    notify_initial_back_stack: Option<bool>,
}

impl NavigatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_rewrites(mut self, max: usize) -> Self {
        self.max_rewrites = Some(max);
        self
    }

    pub fn notify_initial_back_stack(mut self, notify: bool) -> Self {
        self.notify_initial_back_stack = Some(notify);
        self
    }

    /// Build the NavigatorConfig, validating all parameters
    pub fn build(self) -> Result<NavigatorConfig, NavigatorError> {
        let defaults = NavigatorConfig::default();
        let config = NavigatorConfig {
            max_rewrites: self.max_rewrites.unwrap_or(defaults.max_rewrites),
            notify_initial_back_stack: self
                .notify_initial_back_stack
                .unwrap_or(defaults.notify_initial_back_stack),
        };
        config.validate()?;
        Ok(config)
    }
}
