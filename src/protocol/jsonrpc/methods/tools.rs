// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the `list_tools` and `call_tool` methods.
//!
//! `call_tool` is the only method that mutates the note store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::{parse_params, to_result, MethodResult};
use crate::capabilities::CapabilityRegistry;
use crate::protocol::jsonrpc::error::JsonRpcError;

/// Request parameters for the `call_tool` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
    /// Name of the tool to execute
    #[serde(default)]
    pub name: Option<String>,

    /// Tool arguments
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// Handles `list_tools`.
pub fn list_tools(registry: &CapabilityRegistry) -> MethodResult {
    to_result(&registry.list_tools())
}

/// Handles `call_tool`: runs the named tool and returns its content items.
pub fn call_tool(registry: &CapabilityRegistry, params: Option<Value>) -> MethodResult {
    let params: CallToolParams = parse_params(params, "invalid tool parameters")?;

    let name = match params.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(JsonRpcError::invalid_params("tool name is required")),
    };
    let arguments = params.arguments.unwrap_or_default();

    debug!(tool = %name, arguments = arguments.len(), "call_tool");
    let content = registry.call_tool(&name, &arguments)?;
    to_result(&content)
}
