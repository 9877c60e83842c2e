//! Lifecycle host for the notes server.
//!
//! [`ServiceHost`] runs the server loop on a background task and owns the
//! cancellation token that stops it. Cancellation is cooperative: the loop
//! notices it before its next read, so a host blocked on an idle input stream
//! stops only once that read returns.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::transport::{TransportError, TransportResult};
use crate::server::NotesServer;

/// Observable state of a [`ServiceHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// `start` has not been called, or the task was already joined.
    NotStarted,
    /// The server loop is running.
    Running,
    /// The server loop has returned but has not been joined.
    Stopped,
}

/// Runs a [`NotesServer`] as a stoppable background task.
#[derive(Debug)]
pub struct ServiceHost {
    config: ServiceConfig,
    server: Arc<NotesServer>,
    cancel: CancellationToken,
    task: Option<JoinHandle<TransportResult<()>>>,
}

impl ServiceHost {
    /// Creates a host for `server`, described by `config`.
    pub fn new(config: ServiceConfig, server: NotesServer) -> Self {
        Self {
            config,
            server: Arc::new(server),
            cancel: CancellationToken::new(),
            task: None,
        }
    }

    /// The service descriptor.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The hosted server.
    pub fn server(&self) -> &Arc<NotesServer> {
        &self.server
    }

    /// A handle to the token that stops the loop.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Starts serving the process's standard input and output.
    pub fn start(&mut self) -> TransportResult<()> {
        self.ensure_not_started()?;
        info!(service = %self.config.name, "starting service");

        let server = Arc::clone(&self.server);
        let cancel = self.cancel.clone();
        self.task = Some(tokio::spawn(async move { server.run(&cancel).await }));
        Ok(())
    }

    /// Starts serving the given reader and writer.
    pub fn start_with<R, W>(&mut self, reader: R, writer: W) -> TransportResult<()>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        self.ensure_not_started()?;
        info!(service = %self.config.name, "starting service");

        let server = Arc::clone(&self.server);
        let cancel = self.cancel.clone();
        self.task = Some(tokio::spawn(async move {
            server.serve(reader, writer, &cancel).await
        }));
        Ok(())
    }

    /// Signals the loop to stop before its next read.
    pub fn stop(&self) {
        info!(service = %self.config.name, "stopping service");
        self.cancel.cancel();
    }

    /// Current status of the background task.
    pub fn status(&self) -> ServiceStatus {
        match &self.task {
            None => ServiceStatus::NotStarted,
            Some(task) if task.is_finished() => ServiceStatus::Stopped,
            Some(_) => ServiceStatus::Running,
        }
    }

    /// Waits for the loop to return and yields its terminal result.
    pub async fn wait(&mut self) -> TransportResult<()> {
        let task = self.task.take().ok_or(TransportError::NotStarted)?;
        task.await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }

    fn ensure_not_started(&self) -> TransportResult<()> {
        if self.task.is_some() {
            return Err(TransportError::AlreadyStarted);
        }
        Ok(())
    }
}
