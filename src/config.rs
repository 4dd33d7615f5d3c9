//! Session configuration.
//!
//! Configuration covers session bookkeeping, not dispatch semantics: the
//! contract of the twelve entry points is fixed and not configurable.

use serde::{Deserialize, Serialize};

/// Default ceiling on simultaneously live bridge objects in a session
pub const DEFAULT_MAX_LIVE_OBJECTS: usize = 1024;

/// Configuration for a bridge session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Upper bound on simultaneously live bridge objects (default: 1024)
    #[serde(default = "default_max_live_objects")]
    pub max_live_objects: usize,

    /// Emit per-object debug logging (default: false)
    #[serde(default)]
    pub debug: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_live_objects: DEFAULT_MAX_LIVE_OBJECTS,
            debug: false,
        }
    }
}

impl BridgeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the live-object ceiling.
    pub fn with_max_live_objects(mut self, max: usize) -> Self {
        self.max_live_objects = max;
        self
    }

    /// Enable or disable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_live_objects == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_live_objects".into(),
                reason: "must be greater than 0".into(),
            });
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The field name
        field: String,
        /// The reason it's invalid
        reason: String,
    },
}

// Default value functions for serde
fn default_max_live_objects() -> usize {
    DEFAULT_MAX_LIVE_OBJECTS
}
