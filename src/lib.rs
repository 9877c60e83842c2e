//! Notes MCP Server Library
//!
//! This library contains the core components of the notes server: an in-memory
//! note store, the capability registry that exposes notes as resources, prompts
//! and tools, the JSON-RPC 2.0 dispatcher, and the stdio
//! transport that drives it. The binary crate wires these together with
//! configuration and logging.
//!
//! # Architecture
//!
//! - [`store`] holds notes behind a reader/writer lock
//! - [`capabilities`] answers capability queries against the store
//! - [`protocol`] decodes, validates and dispatches JSON-RPC requests
//! - [`transport`] runs the sequential request loop
//! - [`server`] and [`service`] host the loop and stop it on request

pub mod capabilities;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod service;
pub mod store;
pub mod transport;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the notes server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
