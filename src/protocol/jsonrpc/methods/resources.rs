// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the `list_resources` and `read_resource` methods.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{parse_params, to_result, MethodResult};
use crate::capabilities::CapabilityRegistry;
use crate::protocol::jsonrpc::error::JsonRpcError;

/// Request parameters for the `read_resource` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResourceParams {
    /// URI of the resource to read
    #[serde(default)]
    pub uri: Option<String>,
}

/// Handles `list_resources`: one resource per stored note.
pub fn list_resources(registry: &CapabilityRegistry) -> MethodResult {
    to_result(&registry.list_resources())
}

/// Handles `read_resource`: returns the addressed note's content as a string.
pub fn read_resource(registry: &CapabilityRegistry, params: Option<Value>) -> MethodResult {
    let params: ReadResourceParams = parse_params(params, "invalid URI parameter")?;

    let uri = match params.uri {
        Some(uri) if !uri.is_empty() => uri,
        _ => return Err(JsonRpcError::invalid_params("URI is required")),
    };

    debug!(%uri, "read_resource");
    let content = registry.read_resource(&uri)?;
    Ok(Value::String(content))
}
