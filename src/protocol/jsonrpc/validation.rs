// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Envelope validation for decoded JSON-RPC 2.0 requests.
//!
//! Decoding already guarantees the message is a JSON object with correctly typed
//! members. Validation checks the two envelope rules that are reported back to the
//! client without stopping the transport: the protocol version and a non-empty
//! method name.

use super::error::JsonRpcError;
use super::types::{Request, JSONRPC_VERSION};

/// Validates the envelope of a decoded request.
///
/// Performs the following checks, in order:
/// - the `jsonrpc` member is exactly "2.0"
/// - the `method` member is a non-empty string
///
/// Returns an invalid-request error describing the first failed check.
pub fn validate_request(request: &Request) -> Result<(), JsonRpcError> {
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(JsonRpcError::invalid_request(
            "invalid JSON-RPC version",
            format_args!("expected version {JSONRPC_VERSION}"),
        ));
    }

    if request.method.is_empty() {
        return Err(JsonRpcError::invalid_request("method is required", "empty method"));
    }

    Ok(())
}
