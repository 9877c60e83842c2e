//! Service descriptor configuration.
//!
//! Identifies the server when it runs under a service manager.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Service descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Short service name
    pub name: String,

    /// Human-readable service name
    pub display_name: String,

    /// One-line description of the service
    pub description: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "MCPServerNotes".to_string(),
            display_name: "MCP Service - Notes".to_string(),
            description: "A service for running the notes MCP".to_string(),
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("display_name", &self.display_name),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "service {field} cannot be empty"
                )));
            }
        }
        Ok(())
    }
}
