// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Standard I/O transport.
//!
//! Incoming messages are a stream of JSON objects. Whitespace between them is
//! ignored, so one object per line, several objects on a line, and an object
//! spread over several lines are all accepted. Responses are always written one
//! per line. The loop handles one message at a time: decode it, validate the
//! envelope, dispatch, then write and flush the response before decoding the
//! next one.
//!
//! Only three things stop the loop: end of input, a cancellation observed at the
//! top of an iteration, and a fatal error (an undecodable message or a failed
//! read or write). A request that decodes but is rejected still gets a response
//! and the loop keeps going.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::transport::{TransportError, TransportResult};
use crate::protocol::jsonrpc::{validate_request, Id, JsonRpcError, JsonRpcHandler, Request, Response};

/// Lifecycle state of a [`StdioTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// The loop is serving messages.
    Running,
    /// The loop is not serving messages, either not yet started or finished.
    Stopped,
}

/// Stream-delimited JSON-RPC transport.
#[derive(Debug)]
pub struct StdioTransport {
    handler: JsonRpcHandler,
    state: TransportState,
}

impl StdioTransport {
    /// Creates a transport that dispatches into `handler`.
    pub fn new(handler: JsonRpcHandler) -> Self {
        Self {
            handler,
            state: TransportState::Stopped,
        }
    }

    /// Current state of the loop.
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// The dispatcher requests are routed to.
    pub fn handler(&self) -> &JsonRpcHandler {
        &self.handler
    }

    /// Serves the process's standard input and output until it stops.
    pub async fn run(&mut self, cancel: &CancellationToken) -> TransportResult<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer, cancel).await
    }

    /// Serves `reader` and `writer` until end of input, cancellation or a fatal error.
    ///
    /// Returns `Ok(())` on end of input and [`TransportError::Cancelled`] when the
    /// token was cancelled. Cancellation is checked before each read and never
    /// interrupts a read already in progress.
    pub async fn serve<R, W>(
        &mut self,
        reader: R,
        writer: W,
        cancel: &CancellationToken,
    ) -> TransportResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.state = TransportState::Running;
        info!("transport started");

        let result = serve_messages(&self.handler, reader, writer, cancel).await;

        self.state = TransportState::Stopped;
        match &result {
            Ok(()) => info!("end of input, transport stopped"),
            Err(TransportError::Cancelled) => info!("transport cancelled"),
            Err(err) => error!(error = %err, "transport stopped on fatal error"),
        }
        result
    }
}

async fn serve_messages<R, W>(
    handler: &JsonRpcHandler,
    mut reader: R,
    mut writer: W,
    cancel: &CancellationToken,
) -> TransportResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut pending = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let request = match next_request(&mut reader, &mut pending).await {
            Ok(Some(request)) => request,
            Ok(None) => return Ok(()),
            Err(TransportError::Decode(err)) => {
                warn!(error = %err, "malformed message");
                let response = Response::error(Id::Null, JsonRpcError::parse_error(&err));
                write_response(&mut writer, &response).await?;
                return Err(TransportError::Decode(err));
            }
            Err(err) => return Err(err),
        };
        debug!(id = %request.id, method = %request.method, "received request");

        let response = match validate_request(&request) {
            Ok(()) => handler.dispatch(request),
            Err(rejection) => {
                warn!(id = %request.id, message = %rejection.message, "invalid request envelope");
                Response::error(request.id, rejection)
            }
        };

        write_response(&mut writer, &response).await?;
    }
}

/// Decodes the next request from `pending`, reading more input as needed.
///
/// Input is pulled a line at a time so a complete message is answered without
/// waiting for the next one. Bytes after the decoded message stay in `pending`.
/// Returns `Ok(None)` once the input ends with nothing but whitespace left.
async fn next_request<R>(reader: &mut R, pending: &mut Vec<u8>) -> TransportResult<Option<Request>>
where
    R: AsyncBufRead + Unpin,
{
    let mut at_eof = false;

    loop {
        let (decoded, consumed) = {
            let mut stream = serde_json::Deserializer::from_slice(pending).into_iter::<Request>();
            let decoded = stream.next();
            (decoded, stream.byte_offset())
        };

        match decoded {
            Some(Ok(request)) => {
                pending.drain(..consumed);
                return Ok(Some(request));
            }
            // Incomplete message, wait for more input.
            Some(Err(err)) if err.is_eof() && !at_eof => {}
            Some(Err(err)) => {
                pending.clear();
                return Err(TransportError::Decode(err));
            }
            None if at_eof => {
                pending.clear();
                return Ok(None);
            }
            None => pending.clear(),
        }

        let read = reader
            .read_until(b'\n', pending)
            .await
            .map_err(TransportError::Read)?;
        at_eof = read == 0;
    }
}

/// Writes one response as a single JSON line and flushes it.
pub async fn write_response<W>(writer: &mut W, response: &Response) -> TransportResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut frame = serde_json::to_vec(response).map_err(TransportError::Encode)?;
    frame.push(b'\n');

    writer.write_all(&frame).await.map_err(TransportError::Write)?;
    writer.flush().await.map_err(TransportError::Write)
}
