// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the `list_prompts` and `get_prompt` methods.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{parse_params, to_result, MethodResult};
use crate::capabilities::CapabilityRegistry;
use crate::protocol::jsonrpc::error::JsonRpcError;

/// Request parameters for the `get_prompt` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPromptParams {
    /// Name of the prompt template
    #[serde(default)]
    pub name: Option<String>,

    /// Template arguments; all values must be strings
    #[serde(default)]
    pub arguments: Option<HashMap<String, String>>,
}

/// Handles `list_prompts`.
pub fn list_prompts(registry: &CapabilityRegistry) -> MethodResult {
    to_result(&registry.list_prompts())
}

/// Handles `get_prompt`: renders the named prompt against the current notes.
pub fn get_prompt(registry: &CapabilityRegistry, params: Option<Value>) -> MethodResult {
    let params: GetPromptParams = parse_params(params, "invalid prompt parameters")?;

    let name = match params.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(JsonRpcError::invalid_params("prompt name is required")),
    };
    let arguments = params.arguments.unwrap_or_default();

    debug!(prompt = %name, arguments = arguments.len(), "get_prompt");
    let result = registry.get_prompt(&name, &arguments)?;
    to_result(&result)
}
