// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Descriptor and result types returned by the capability registry.
//!
//! These are serialized directly into the `result` member of JSON-RPC responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MIME type of every note resource.
pub const TEXT_PLAIN: &str = "text/plain";

/// A note exposed as a read-only resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource address, `note://internal/{name}`
    pub uri: String,

    /// Display name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// MIME type of the resource content
    pub mime_type: String,
}

/// An argument accepted by a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptArgument {
    /// Argument name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Whether the argument must be supplied
    pub required: bool,
}

/// A parametrized prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Prompt name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Accepted arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<PromptArgument>,
}

/// An invocable tool and the schema of its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema describing valid arguments
    pub input_schema: Value,
}

/// A typed text content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    /// Content type tag, always `text`
    #[serde(rename = "type")]
    pub content_type: String,

    /// The text itself
    pub text: String,
}

impl TextContent {
    /// Creates a `text` content item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Role of a prompt message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// End user
    User,
    /// Model output
    Assistant,
}

/// One message of a rendered prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// Author role
    pub role: Role,

    /// Message body
    pub content: TextContent,
}

/// Result of rendering a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPromptResult {
    /// Human-readable description of the rendered prompt
    pub description: String,

    /// Rendered messages
    pub messages: Vec<PromptMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_uses_camel_case() {
        let resource = Resource {
            uri: "note://internal/a".to_string(),
            name: "Note: a".to_string(),
            description: "A simple note named a".to_string(),
            mime_type: TEXT_PLAIN.to_string(),
        };

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["mimeType"], json!("text/plain"));
        assert!(value.get("mime_type").is_none());
    }

    #[test]
    fn test_prompt_message_serialization() {
        let message = PromptMessage {
            role: Role::User,
            content: TextContent::text("hello"),
        };

        let json_str = serde_json::to_string(&message).unwrap();
        assert_eq!(
            json_str,
            r#"{"role":"user","content":{"type":"text","text":"hello"}}"#
        );
    }

    #[test]
    fn test_prompt_without_arguments_omits_field() {
        let prompt = Prompt {
            name: "p".to_string(),
            description: "d".to_string(),
            arguments: Vec::new(),
        };

        let value = serde_json::to_value(&prompt).unwrap();
        assert!(value.get("arguments").is_none());
    }
}
