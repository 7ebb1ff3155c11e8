//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::repository::RepoError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Repo(#[from] RepoError),

    #[error("config already exists at {0}, refusing to overwrite")]
    AlreadyInitialized(PathBuf),

    #[error("boot failed: {0}")]
    BootFailed(String),
}
