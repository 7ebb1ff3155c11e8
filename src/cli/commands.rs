//! CLI command implementations.
//!
//! `serve` owns the tokio runtime: main stays synchronous and the
//! runtime is built only when the serving loop actually starts.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::ServiceConfig;
use crate::repository::SqliteBookRepository;
use crate::rest_api::RestServer;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed CLI invocation.
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Write a default config file and create the database it points at.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(config_path.to_path_buf()));
    }

    let config = ServiceConfig::default();
    config.save(config_path)?;

    // Opening creates the file and the books table.
    SqliteBookRepository::open(&config.database.path)?;

    println!("wrote {}", config_path.display());
    println!("created database at {}", config.database.path.display());
    Ok(())
}

/// Load config, open storage, and serve until the process exits.
pub fn serve(config_path: &Path) -> CliResult<()> {
    init_tracing();

    let config = ServiceConfig::load(config_path)?;
    info!(config = %config_path.display(), "loaded configuration");

    let repo = Arc::new(SqliteBookRepository::open(&config.database.path)?);
    let server = RestServer::new(repo, config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::BootFailed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::BootFailed(e.to_string()))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info,tower_http=info".into()),
        )
        .init();
}
