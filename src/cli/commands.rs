//! CLI command implementations

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::StoreConfig;
use crate::dispatch::Dispatcher;
use crate::server::{HttpServerConfig, PromptServer};
use crate::store::InMemoryStore;

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the facade and serve until interrupted.
///
/// The store configuration is read from the environment once here;
/// validation happens per request so a misconfigured process still
/// answers with ERROR envelopes instead of refusing to start.
pub fn serve(host: String, port: u16) -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = StoreConfig::from_env();
    let store = Arc::new(InMemoryStore::new());
    let dispatcher = Dispatcher::new(config, store);
    let server = PromptServer::with_config(HttpServerConfig::with_addr(host, port), dispatcher);

    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(server.start()).map_err(CliError::Server)
}
