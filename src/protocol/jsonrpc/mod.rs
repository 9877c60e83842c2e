// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 protocol handling for the notes server.
//!
//! This module implements the parts of the
//! [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification) the server
//! needs: request and response envelopes, envelope validation, standard and
//! application error codes, and the dispatcher for the fixed method set.
//!
//! # Methods
//!
//! | Method           | Params                    |
//! |------------------|---------------------------|
//! | `list_resources` | none                      |
//! | `read_resource`  | `{uri}`                   |
//! | `list_prompts`   | none                      |
//! | `get_prompt`     | `{name, arguments?}`      |
//! | `list_tools`     | none                      |
//! | `call_tool`      | `{name, arguments?}`      |
//!
//! # Example
//!
//! ```
//! use notes_mcp_lib::protocol::jsonrpc::{validate_request, Id, JsonRpcHandler, Request};
//! use serde_json::json;
//!
//! let handler = JsonRpcHandler::new();
//!
//! let request: Request = serde_json::from_str(
//!     r#"{"jsonrpc": "2.0", "id": 1, "method": "call_tool",
//!         "params": {"name": "add-note", "arguments": {"name": "todo", "content": "milk"}}}"#,
//! ).unwrap();
//! validate_request(&request).unwrap();
//!
//! let response = handler.dispatch(request);
//! assert_eq!(response.id, Id::from(1));
//! assert_eq!(
//!     response.result,
//!     Some(json!([{"type": "text", "text": "Added note 'todo' with content: milk"}]))
//! );
//! ```

pub mod error;
pub mod handler;
pub mod methods;
pub mod types;
pub mod validation;

// Re-exports
pub use error::{ErrorCode, JsonRpcError};
pub use handler::JsonRpcHandler;
pub use methods::{Method, MethodResult};
pub use types::{Id, Request, Response, JSONRPC_VERSION};
pub use validation::validate_request;

#[cfg(test)]
mod tests;
