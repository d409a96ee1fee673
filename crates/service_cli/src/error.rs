//! CLI error type.

use std::path::PathBuf;

use adapter_feeds::FeedError;
use pricer_core::types::ParamError;
use pricer_fdm::FdmError;
use thiserror::Error;

/// Convenience alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line interface.
#[derive(Error, Debug)]
pub enum CliError {
    /// A referenced input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Mutually inconsistent or malformed command-line arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Market data failure.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Solver failure.
    #[error(transparent)]
    Fdm(#[from] FdmError),

    /// Parameter validation failure.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Output / filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output failure.
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),
}
