//! Protocol module for the notes server.
//!
//! This module implements JSON-RPC 2.0 envelope handling, validation and the
//! method dispatch table.

pub mod jsonrpc;
