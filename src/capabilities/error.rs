// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for capability operations.

use thiserror::Error;

/// Errors produced while reading resources, rendering prompts or calling tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// No note is stored under the requested name.
    #[error("note not found: {0}")]
    NoteNotFound(String),

    /// The resource URI uses a scheme other than `note`.
    #[error("unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    /// The resource URI could not be parsed.
    #[error("invalid URI: {0}")]
    InvalidUri(String),

    /// The requested prompt is not defined.
    #[error("unknown prompt: {0}")]
    UnknownPrompt(String),

    /// The requested tool is not defined.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments are missing or have the wrong type.
    #[error("{0}")]
    InvalidArguments(String),
}

/// Broad classification of a [`CapabilityError`].
///
/// The dispatcher maps kinds, not individual variants, onto wire error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A note, prompt or tool does not exist
    NotFound,
    /// The operation is not supported for this input
    Unsupported,
    /// Caller-supplied arguments are unusable
    InvalidArguments,
    /// Anything else
    Internal,
}

impl CapabilityError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CapabilityError::NoteNotFound(_)
            | CapabilityError::UnknownPrompt(_)
            | CapabilityError::UnknownTool(_) => ErrorKind::NotFound,
            CapabilityError::UnsupportedScheme(_) => ErrorKind::Unsupported,
            CapabilityError::InvalidArguments(_) => ErrorKind::InvalidArguments,
            CapabilityError::InvalidUri(_) => ErrorKind::Internal,
        }
    }
}

/// Specialized Result type for capability operations.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(CapabilityError::NoteNotFound("a".into()).kind(), ErrorKind::NotFound);
        assert_eq!(CapabilityError::UnknownPrompt("p".into()).kind(), ErrorKind::NotFound);
        assert_eq!(CapabilityError::UnknownTool("t".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            CapabilityError::UnsupportedScheme("http".into()).kind(),
            ErrorKind::Unsupported
        );
        assert_eq!(
            CapabilityError::InvalidArguments("missing or invalid name".into()).kind(),
            ErrorKind::InvalidArguments
        );
        assert_eq!(CapabilityError::InvalidUri("bad".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CapabilityError::NoteNotFound("missing".into()).to_string(),
            "note not found: missing"
        );
        assert_eq!(
            CapabilityError::UnsupportedScheme("http".into()).to_string(),
            "unsupported URI scheme: http"
        );
        assert_eq!(
            CapabilityError::InvalidArguments("missing or invalid content".into()).to_string(),
            "missing or invalid content"
        );
    }
}
