// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Capability registry for the notes server.
//!
//! The registry owns the [`NoteStore`] and answers every capability query:
//!
//! - resources: one per stored note, addressed as `note://internal/{name}`
//! - prompts: the single `summarize-notes` template
//! - tools: the single `add-note` action
//!
//! The prompt and tool sets are closed. Adding one means adding a variant to
//! [`PromptName`] or [`ToolName`].

pub mod error;
pub mod types;

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use url::Url;

use crate::store::NoteStore;

pub use error::{CapabilityError, CapabilityResult, ErrorKind};
pub use types::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, Resource, Role, TextContent, Tool,
    TEXT_PLAIN,
};

/// URI scheme of note resources.
pub const NOTE_SCHEME: &str = "note";

/// Prefix of every note resource URI.
pub const NOTE_URI_PREFIX: &str = "note://internal/";

const SUMMARY_HEADER: &str = "Here are the current notes to summarize:";
const DETAILED_SUFFIX: &str = " Give extensive details.";

/// Summary style accepted by the `summarize-notes` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    /// Short summary
    #[default]
    Brief,
    /// Extensive summary
    Detailed,
}

impl SummaryStyle {
    /// Reads the style from prompt arguments. Unset, empty or unrecognized values are brief.
    pub fn from_arguments(arguments: &HashMap<String, String>) -> Self {
        match arguments.get("style").map(String::as_str) {
            Some("detailed") => SummaryStyle::Detailed,
            _ => SummaryStyle::Brief,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
        }
    }
}

/// The prompts this server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptName {
    /// `summarize-notes`
    SummarizeNotes,
}

impl PromptName {
    /// Every defined prompt.
    pub const ALL: [PromptName; 1] = [PromptName::SummarizeNotes];

    /// Looks a prompt up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prompt| prompt.as_str() == name)
    }

    /// Wire name of the prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptName::SummarizeNotes => "summarize-notes",
        }
    }

    /// Static descriptor of the prompt.
    pub fn descriptor(self) -> Prompt {
        match self {
            PromptName::SummarizeNotes => Prompt {
                name: self.as_str().to_string(),
                description: "Creates a summary of all notes".to_string(),
                arguments: vec![PromptArgument {
                    name: "style".to_string(),
                    description: "Style of the summary (brief/detailed)".to_string(),
                    required: false,
                }],
            },
        }
    }
}

/// The tools this server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    /// `add-note`
    AddNote,
}

impl ToolName {
    /// Every defined tool.
    pub const ALL: [ToolName; 1] = [ToolName::AddNote];

    /// Looks a tool up by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// Wire name of the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::AddNote => "add-note",
        }
    }

    /// Static descriptor of the tool.
    pub fn descriptor(self) -> Tool {
        match self {
            ToolName::AddNote => Tool {
                name: self.as_str().to_string(),
                description: "Add a new note".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "content": {"type": "string"}
                    },
                    "required": ["name", "content"]
                }),
            },
        }
    }
}

/// Answers resource, prompt and tool requests against the note store.
#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    store: NoteStore,
}

impl CapabilityRegistry {
    /// Creates a registry backed by an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that takes ownership of an existing store.
    pub fn with_store(store: NoteStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Lists one resource per stored note.
    pub fn list_resources(&self) -> Vec<Resource> {
        let notes = self.store.list();
        debug!(count = notes.len(), "listing resources");

        notes
            .into_iter()
            .map(|note| Resource {
                uri: format!("{NOTE_URI_PREFIX}{}", note.name),
                name: format!("Note: {}", note.name),
                description: format!("A simple note named {}", note.name),
                mime_type: TEXT_PLAIN.to_string(),
            })
            .collect()
    }

    /// Returns the content of the note addressed by `uri`.
    ///
    /// # Errors
    ///
    /// * [`CapabilityError::UnsupportedScheme`] if the scheme is not `note`
    /// * [`CapabilityError::NoteNotFound`] if no such note is stored
    /// * [`CapabilityError::InvalidUri`] if `uri` cannot be parsed at all
    pub fn read_resource(&self, uri: &str) -> CapabilityResult<String> {
        let name = note_name_from_uri(uri)?;
        debug!(note = %name, "reading resource");

        self.store
            .get(&name)
            .ok_or(CapabilityError::NoteNotFound(name))
    }

    /// Lists every prompt descriptor.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        PromptName::ALL.iter().map(|prompt| prompt.descriptor()).collect()
    }

    /// Renders the prompt called `name`.
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> CapabilityResult<GetPromptResult> {
        let prompt = PromptName::from_name(name)
            .ok_or_else(|| CapabilityError::UnknownPrompt(name.to_string()))?;

        match prompt {
            PromptName::SummarizeNotes => Ok(self.summarize_notes(SummaryStyle::from_arguments(arguments))),
        }
    }

    fn summarize_notes(&self, style: SummaryStyle) -> GetPromptResult {
        let suffix = match style {
            SummaryStyle::Brief => "",
            SummaryStyle::Detailed => DETAILED_SUFFIX,
        };

        let notes_list: String = self
            .store
            .list()
            .iter()
            .map(|note| format!("- {}: {}\n", note.name, note.content))
            .collect();

        debug!(style = style.as_str(), "rendered summarize-notes prompt");

        GetPromptResult {
            description: "Summarize the current notes".to_string(),
            messages: vec![PromptMessage {
                role: Role::User,
                content: TextContent::text(format!("{SUMMARY_HEADER}{suffix}\n\n{notes_list}")),
            }],
        }
    }

    /// Lists every tool descriptor.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolName::ALL.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Invokes the tool called `name`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> CapabilityResult<Vec<TextContent>> {
        let tool = ToolName::from_name(name)
            .ok_or_else(|| CapabilityError::UnknownTool(name.to_string()))?;

        match tool {
            ToolName::AddNote => self.add_note(arguments),
        }
    }

    fn add_note(&self, arguments: &Map<String, Value>) -> CapabilityResult<Vec<TextContent>> {
        let name = required_string(arguments, "name")?;
        let content = required_string(arguments, "content")?;

        self.store.set(name, content);
        info!(note = %name, "added note");

        Ok(vec![TextContent::text(format!(
            "Added note '{name}' with content: {content}"
        ))])
    }
}

fn required_string<'a>(arguments: &'a Map<String, Value>, key: &str) -> CapabilityResult<&'a str> {
    match arguments.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CapabilityError::InvalidArguments(format!(
            "missing or invalid {key}"
        ))),
    }
}

/// Extracts the note name from a resource URI.
///
/// A relative reference has no scheme and is rejected as unsupported. An opaque
/// URI such as `note:foo` has no path and yields the empty name. The name is
/// taken from the path as written, so dot segments like `..` are kept.
fn note_name_from_uri(uri: &str) -> CapabilityResult<String> {
    let parsed = match Url::parse(uri) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(CapabilityError::UnsupportedScheme(String::new()))
        }
        Err(e) => return Err(CapabilityError::InvalidUri(format!("{uri}: {e}"))),
    };

    if parsed.scheme() != NOTE_SCHEME {
        return Err(CapabilityError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    if parsed.cannot_be_a_base() {
        return Ok(String::new());
    }

    let path = raw_path(uri);
    let encoded = path.strip_prefix('/').unwrap_or(path);
    Ok(percent_decode_str(encoded).decode_utf8_lossy().into_owned())
}

// Path of a hierarchical URI exactly as written. `Url::path` normalizes dot
// segments away, which would let `note://internal/../a` read note `a`.
fn raw_path(uri: &str) -> &str {
    let uri = uri.trim_matches(|c: char| c <= ' ');
    let rest = uri.split_once(':').map_or(uri, |(_, rest)| rest);
    let rest = &rest[..rest.find(['?', '#']).unwrap_or(rest.len())];

    match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |start| &authority_and_path[start..]),
        None => rest,
    }
}
