// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 method handlers.
//!
//! The method set is closed: [`Method`] lists every name the server answers to,
//! and each variant is served by one function in the submodules.

pub mod prompts;
pub mod resources;
pub mod tools;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::JsonRpcError;

/// Type alias for method handler response.
pub type MethodResult = std::result::Result<Value, JsonRpcError>;

/// The methods exposed by the notes server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `list_resources`
    ListResources,
    /// `read_resource`
    ReadResource,
    /// `list_prompts`
    ListPrompts,
    /// `get_prompt`
    GetPrompt,
    /// `list_tools`
    ListTools,
    /// `call_tool`
    CallTool,
}

impl Method {
    /// Every method, in the order they are documented.
    pub const ALL: [Method; 6] = [
        Method::ListResources,
        Method::ReadResource,
        Method::ListPrompts,
        Method::GetPrompt,
        Method::ListTools,
        Method::CallTool,
    ];

    /// Looks a method up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }

    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::ListResources => "list_resources",
            Method::ReadResource => "read_resource",
            Method::ListPrompts => "list_prompts",
            Method::GetPrompt => "get_prompt",
            Method::ListTools => "list_tools",
            Method::CallTool => "call_tool",
        }
    }

    /// Returns true if the method cannot run without a params object.
    pub fn requires_params(self) -> bool {
        matches!(self, Method::ReadResource | Method::GetPrompt | Method::CallTool)
    }
}

/// Decodes a params object into the handler's parameter type.
///
/// Unknown members are ignored. Absent params, non-object params and members of
/// the wrong type are all invalid params; for the last two the decoder's message
/// is attached as error data.
pub(crate) fn parse_params<T: DeserializeOwned>(
    params: Option<Value>,
    message: &str,
) -> Result<T, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("params required"))?;

    if !params.is_object() {
        return Err(JsonRpcError::invalid_params(message).with_detail("params must be an object"));
    }

    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(message).with_detail(e))
}

/// Serializes a handler's output into a result value.
pub(crate) fn to_result<T: Serialize>(value: &T) -> MethodResult {
    serde_json::to_value(value).map_err(JsonRpcError::internal_error)
}
