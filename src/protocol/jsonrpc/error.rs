// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error codes and the wire error object of the JSON-RPC 2.0 protocol.
//!
//! This module defines error codes and error types according to the
//! [JSON-RPC 2.0 specification](https://www.jsonrpc.org/specification#error_object),
//! plus the two application codes used by the notes server.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::capabilities::{CapabilityError, ErrorKind};

/// Error codes returned by the notes server.
///
/// The codes -32700, -32600, -32601, -32602 and -32603 are standard JSON-RPC 2.0
/// errors. -32001 and -32002 sit in the implementation-defined server range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parse error (-32700)
    /// Invalid JSON was received by the server.
    ParseError = -32700,

    /// Invalid Request (-32600)
    /// The JSON sent is not a valid Request object.
    InvalidRequest = -32600,

    /// Method not found (-32601)
    /// The method does not exist / is not available.
    MethodNotFound = -32601,

    /// Invalid params (-32602)
    /// Invalid method parameter(s).
    InvalidParams = -32602,

    /// Internal error (-32603)
    /// Internal JSON-RPC error.
    InternalError = -32603,

    /// Not found (-32001)
    /// The addressed note, prompt or tool does not exist.
    NotFound = -32001,

    /// Unsupported (-32002)
    /// The operation is not supported for the given input.
    Unsupported = -32002,
}

impl ErrorCode {
    /// Returns a string description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "parse error",
            ErrorCode::InvalidRequest => "invalid request",
            ErrorCode::MethodNotFound => "method not found",
            ErrorCode::InvalidParams => "invalid params",
            ErrorCode::InternalError => "internal error",
            ErrorCode::NotFound => "not found",
            ErrorCode::Unsupported => "unsupported operation",
        }
    }

    /// Create an ErrorCode from a raw integer value.
    ///
    /// Returns None if the code is not one this server produces.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -32700 => Some(ErrorCode::ParseError),
            -32600 => Some(ErrorCode::InvalidRequest),
            -32601 => Some(ErrorCode::MethodNotFound),
            -32602 => Some(ErrorCode::InvalidParams),
            -32603 => Some(ErrorCode::InternalError),
            -32001 => Some(ErrorCode::NotFound),
            -32002 => Some(ErrorCode::Unsupported),
            _ => None,
        }
    }

    /// Returns the integer error code.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code as i32
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// The error code
    pub code: i32,

    /// A short description of the error
    pub message: String,

    /// Additional information about the error (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    /// Creates a new JSON-RPC error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
        }
    }

    /// Creates a new JSON-RPC error with additional data.
    pub fn with_data(code: ErrorCode, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Attaches a human-readable detail string as the error data.
    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.data = Some(serde_json::Value::String(detail.to_string()));
        self
    }

    /// Creates a parse error carrying the decoder's message.
    pub fn parse_error(detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ParseError, "parse error").with_detail(detail)
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidRequest, message).with_detail(detail)
    }

    /// Creates a method not found error naming the method.
    pub fn method_not_found(method: &str) -> Self {
        Self::new(ErrorCode::MethodNotFound, "method not found")
            .with_detail(format_args!("unknown method: {method}"))
    }

    /// Creates an invalid params error whose data repeats the message.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        let message = message.into();
        let detail = message.clone();
        Self::new(ErrorCode::InvalidParams, message).with_detail(detail)
    }

    /// Creates an internal error carrying the underlying failure.
    pub fn internal_error(detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, "internal error").with_detail(detail)
    }

    /// Returns the typed error code, if it is one this server knows.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }
}

impl fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<CapabilityError> for JsonRpcError {
    /// Translates a capability failure by its kind.
    fn from(error: CapabilityError) -> Self {
        let (code, message) = match error.kind() {
            ErrorKind::NotFound => {
                let subject = match error {
                    CapabilityError::UnknownPrompt(_) => "prompt not found",
                    CapabilityError::UnknownTool(_) => "tool not found",
                    _ => "note not found",
                };
                (ErrorCode::NotFound, subject)
            }
            ErrorKind::Unsupported => (ErrorCode::Unsupported, "unsupported URI scheme"),
            ErrorKind::InvalidArguments => (ErrorCode::InvalidParams, "invalid tool arguments"),
            ErrorKind::Internal => (ErrorCode::InternalError, "internal error"),
        };

        Self::new(code, message).with_detail(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(ErrorCode::ParseError.description(), "parse error");
        assert_eq!(ErrorCode::InvalidRequest.description(), "invalid request");
        assert_eq!(ErrorCode::MethodNotFound.description(), "method not found");
        assert_eq!(ErrorCode::InvalidParams.description(), "invalid params");
        assert_eq!(ErrorCode::InternalError.description(), "internal error");
        assert_eq!(ErrorCode::NotFound.description(), "not found");
        assert_eq!(ErrorCode::Unsupported.description(), "unsupported operation");
    }

    #[test_case(-32700, Some(ErrorCode::ParseError))]
    #[test_case(-32600, Some(ErrorCode::InvalidRequest))]
    #[test_case(-32601, Some(ErrorCode::MethodNotFound))]
    #[test_case(-32602, Some(ErrorCode::InvalidParams))]
    #[test_case(-32603, Some(ErrorCode::InternalError))]
    #[test_case(-32001, Some(ErrorCode::NotFound))]
    #[test_case(-32002, Some(ErrorCode::Unsupported))]
    #[test_case(-32000, None)]
    #[test_case(0, None)]
    fn test_error_code_from_code(code: i32, expected: Option<ErrorCode>) {
        assert_eq!(ErrorCode::from_code(code), expected);
        if let Some(error_code) = expected {
            assert_eq!(error_code.code(), code);
        }
    }

    #[test]
    fn test_jsonrpc_error_creation() {
        let error = JsonRpcError::new(ErrorCode::ParseError, "Invalid JSON");
        assert_eq!(error.code, -32700);
        assert_eq!(error.message, "Invalid JSON");
        assert!(error.data.is_none());

        let error_with_data = JsonRpcError::with_data(
            ErrorCode::InvalidParams,
            "Invalid parameters",
            json!({"field": "uri", "issue": "required"}),
        );
        assert_eq!(error_with_data.code, -32602);
        assert_eq!(
            error_with_data.data,
            Some(json!({"field": "uri", "issue": "required"}))
        );
    }

    #[test]
    fn test_standard_errors() {
        let parse_error = JsonRpcError::parse_error("expected value at line 1 column 1");
        assert_eq!(parse_error.code, -32700);
        assert_eq!(parse_error.message, "parse error");
        assert_eq!(parse_error.data, Some(json!("expected value at line 1 column 1")));

        let method_not_found = JsonRpcError::method_not_found("sum");
        assert_eq!(method_not_found.code, -32601);
        assert_eq!(method_not_found.data, Some(json!("unknown method: sum")));

        let invalid_params = JsonRpcError::invalid_params("params required");
        assert_eq!(invalid_params.code, -32602);
        assert_eq!(invalid_params.data, Some(json!("params required")));

        let internal = JsonRpcError::internal_error("boom");
        assert_eq!(internal.code, -32603);
        assert_eq!(internal.error_code(), Some(ErrorCode::InternalError));
    }

    #[test_case(CapabilityError::NoteNotFound("a".into()), -32001, "note not found")]
    #[test_case(CapabilityError::UnknownPrompt("p".into()), -32001, "prompt not found")]
    #[test_case(CapabilityError::UnknownTool("t".into()), -32001, "tool not found")]
    #[test_case(CapabilityError::UnsupportedScheme("http".into()), -32002, "unsupported URI scheme")]
    #[test_case(CapabilityError::InvalidArguments("missing or invalid name".into()), -32602, "invalid tool arguments")]
    #[test_case(CapabilityError::InvalidUri("bad".into()), -32603, "internal error")]
    fn test_capability_error_translation(error: CapabilityError, code: i32, message: &str) {
        let detail = error.to_string();
        let translated = JsonRpcError::from(error);

        assert_eq!(translated.code, code);
        assert_eq!(translated.message, message);
        assert_eq!(translated.data, Some(json!(detail)));
    }
}
