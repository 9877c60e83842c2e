//! Server configuration module.

use std::time::Duration;

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Name of the server (used in logs)
    pub name: String,

    /// How long to let in-flight work drain after cancellation, in milliseconds
    pub shutdown_timeout_ms: u64,
}

impl ServerConfig {
    /// The shutdown timeout as a [`Duration`].
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "notes-server".to_string(),
            shutdown_timeout_ms: 1000,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server name cannot be empty".to_string(),
            ));
        }

        if self.shutdown_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "shutdown_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
