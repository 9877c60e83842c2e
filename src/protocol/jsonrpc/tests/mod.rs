// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the JSON-RPC layer and the request loop that drives it.

mod property_tests;

use serde_json::Value;

use crate::protocol::jsonrpc::{JsonRpcHandler, Request, Response};

/// Decodes a raw request, panicking on malformed input.
pub(super) fn request(raw: &str) -> Request {
    serde_json::from_str(raw).unwrap()
}

/// Dispatches a raw request and returns the response as JSON.
pub(super) fn dispatch(handler: &JsonRpcHandler, raw: &str) -> Value {
    let response: Response = handler.dispatch(request(raw));
    serde_json::to_value(response).unwrap()
}

/// Splits transport output into decoded response frames.
pub(super) fn frames(output: &[u8]) -> Vec<Value> {
    output
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_slice(line).unwrap())
        .collect()
}
