//! Notes MCP Server - Main entrypoint.
//!
//! Loads configuration, initializes logging on standard error, and serves
//! JSON-RPC over standard input and output until end of input, a fatal error or
//! an interrupt.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use notes_mcp_lib::capabilities::{PromptName, ToolName};
use notes_mcp_lib::config::{ConfigLoader, LogConfig, NotesConfig, ENV_PREFIX};
use notes_mcp_lib::error::{
    report_error, set_error_reporter, ErrorContext, NotesError, NotesResult, TracingErrorReporter,
};
use notes_mcp_lib::protocol::jsonrpc::Method;
use notes_mcp_lib::server::NotesServer;
use notes_mcp_lib::service::ServiceHost;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the notes server.
#[derive(Parser, Debug)]
#[clap(name = "notes_mcp", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Serve JSON-RPC on standard input and output
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Print the service descriptor and the methods it answers
    Describe,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// standard error so it never mixes with protocol frames.
fn init_logging(config: &LogConfig) -> NotesResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let installed = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| NotesError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the server until it stops, then gives the runtime a bounded time to drain.
fn start(config: NotesConfig) -> NotesResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("notes-worker")
        .build()?;

    let shutdown_timeout = config.server.shutdown_timeout();
    let result = runtime.block_on(serve(config));
    runtime.shutdown_timeout(shutdown_timeout);
    result
}

async fn serve(config: NotesConfig) -> NotesResult<()> {
    let server = NotesServer::new(config.server);
    let mut host = ServiceHost::new(config.service, server);
    let cancel = host.cancellation_token();
    host.start()?;

    tokio::select! {
        result = host.wait() => result.map_err(NotesError::from),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupt received, shutting down");
            cancel.cancel();
            Ok(())
        }
    }
}

fn describe(config: &NotesConfig) {
    let service = &config.service;
    println!("{} ({})", service.name, service.display_name);
    println!("{}", service.description);

    println!();
    println!("methods:");
    for method in Method::ALL {
        println!("  {}", method.as_str());
    }

    println!("prompts:");
    for prompt in PromptName::ALL {
        println!("  {}: {}", prompt.as_str(), prompt.descriptor().description);
    }

    println!("tools:");
    for tool in ToolName::ALL {
        println!("  {}: {}", tool.as_str(), tool.descriptor().description);
    }
}

/// Main entry point for the application.
fn main() -> NotesResult<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging comes up before configuration errors are reported so they reach stderr.
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Start);

    if let Command::GenConfig { output } = &command {
        info!("Generating default configuration");
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, NotesConfig::default().to_toml()?)?;
        info!("Default configuration written to {:?}", output);
        return Ok(());
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    match command {
        Command::Start => {
            info!(server = %config.server.name, version = notes_mcp_lib::VERSION, "Starting notes server");
            match start(config) {
                Ok(()) => Ok(()),
                Err(NotesError::Transport(e)) if e.is_cancelled() => Ok(()),
                Err(e) => {
                    report_error(&ErrorContext::new(e, "server").with_details("request loop stopped"));
                    process::exit(1);
                }
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::Describe => {
            describe(&config);
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
