//! Transport module for the notes server.
//!
//! The server reads a stream of JSON-RPC messages from standard input and writes
//! one response per line to standard output.
//! [`StdioTransport`] owns the request loop; [`write_response`] frames a single
//! response onto any async writer.

pub mod stdio;

pub use stdio::{write_response, StdioTransport, TransportState};
