//! Transport error module.
//!
//! This module defines the fatal conditions of the stdio transport loop. Any of
//! these stops the loop; request-level problems never surface here.

use std::io;
use thiserror::Error;

/// Errors that terminate the transport loop.
#[derive(Error, Debug)]
pub enum TransportError {
    /// An inbound message could not be decoded as a request envelope.
    #[error("failed to decode request: {0}")]
    Decode(#[source] serde_json::Error),

    /// A response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// Error when reading from the input stream.
    #[error("input read error: {0}")]
    Read(#[source] io::Error),

    /// Error when writing to the output stream.
    #[error("output write error: {0}")]
    Write(#[source] io::Error),

    /// The loop observed a cancellation signal.
    #[error("transport cancelled")]
    Cancelled,

    /// Error when the transport is started twice.
    #[error("transport already started")]
    AlreadyStarted,

    /// Error when waiting on a transport that was never started.
    #[error("transport not started")]
    NotStarted,

    /// The task running the transport panicked or was aborted.
    #[error("transport task failed: {0}")]
    Task(String),
}

impl TransportError {
    /// Returns true if the loop stopped because it was asked to.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TransportError::Cancelled)
    }
}

/// Specialized Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
