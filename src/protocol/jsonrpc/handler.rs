// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 dispatcher.
//!
//! This module routes validated requests to their method handler and turns the
//! handler's outcome into exactly one response carrying the request's identifier.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::error::JsonRpcError;
use super::methods::{prompts, resources, tools, Method, MethodResult};
use super::types::{Request, Response};
use crate::capabilities::CapabilityRegistry;

/// Handler for JSON-RPC 2.0 requests.
///
/// This struct is responsible for:
/// - Resolving the method name against the fixed method table
/// - Rejecting params-requiring methods that carry no params
/// - Running the method against the capability registry
/// - Wrapping the outcome in a response with the request identifier
///
/// Cloning is cheap; clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct JsonRpcHandler {
    registry: Arc<CapabilityRegistry>,
}

impl JsonRpcHandler {
    /// Creates a handler backed by a fresh, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler backed by the given registry.
    pub fn with_registry(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this handler dispatches into.
    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    /// Dispatches a request whose envelope has already been validated.
    pub fn dispatch(&self, request: Request) -> Response {
        let Request {
            id, method, params, ..
        } = request;

        let outcome = match Method::from_name(&method) {
            None => Err(JsonRpcError::method_not_found(&method)),
            Some(method) if method.requires_params() && params.is_none() => {
                Err(JsonRpcError::invalid_params("params required"))
            }
            Some(method) => self.call(method, params),
        };

        match outcome {
            Ok(result) => {
                debug!(%id, %method, "request succeeded");
                Response::success(id, result)
            }
            Err(error) => {
                warn!(%id, %method, code = error.code, message = %error.message, "request failed");
                Response::error(id, error)
            }
        }
    }

    /// Runs a single method.
    fn call(&self, method: Method, params: Option<Value>) -> MethodResult {
        let registry = self.registry.as_ref();

        match method {
            Method::ListResources => resources::list_resources(registry),
            Method::ReadResource => resources::read_resource(registry, params),
            Method::ListPrompts => prompts::list_prompts(registry),
            Method::GetPrompt => prompts::get_prompt(registry, params),
            Method::ListTools => tools::list_tools(registry),
            Method::CallTool => tools::call_tool(registry, params),
        }
    }
}
