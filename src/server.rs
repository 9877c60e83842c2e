//! Notes server.
//!
//! Ties a capability registry to the JSON-RPC dispatcher and serves it over a
//! stream of JSON messages.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::capabilities::CapabilityRegistry;
use crate::config::ServerConfig;
use crate::error::transport::TransportResult;
use crate::protocol::jsonrpc::JsonRpcHandler;
use crate::store::NoteStore;
use crate::transport::StdioTransport;

/// A notes server instance: one store, one dispatcher.
#[derive(Debug, Clone)]
pub struct NotesServer {
    config: ServerConfig,
    handler: JsonRpcHandler,
}

impl NotesServer {
    /// Creates a server with an empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, NoteStore::new())
    }

    /// Creates a server over an existing store.
    pub fn with_store(config: ServerConfig, store: NoteStore) -> Self {
        let registry = Arc::new(CapabilityRegistry::with_store(store));
        Self {
            config,
            handler: JsonRpcHandler::with_registry(registry),
        }
    }

    /// Server name from the configuration.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The registry behind this server.
    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        self.handler.registry()
    }

    /// Serves standard input and output.
    pub async fn run(&self, cancel: &CancellationToken) -> TransportResult<()> {
        info!(server = %self.config.name, "serving stdio");
        StdioTransport::new(self.handler.clone()).run(cancel).await
    }

    /// Serves an arbitrary reader and writer pair.
    pub async fn serve<R, W>(
        &self,
        reader: R,
        writer: W,
        cancel: &CancellationToken,
    ) -> TransportResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(server = %self.config.name, "serving stream");
        StdioTransport::new(self.handler.clone())
            .serve(reader, writer, cancel)
            .await
    }
}
