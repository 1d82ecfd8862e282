//! CLI error types

use pickset_lib::error::{CalendarError, PaginatorError, SelectionError};
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An engine rejected the input.
    #[error(transparent)]
    Engine(#[from] pickset_lib::Error),

    /// A scripted selection step could not be parsed.
    #[error("Invalid operation '{0}' (expected select:KEY, toggle:KEY, deselect:KEY, range:KEY, extend:KEY, all or clear)")]
    InvalidOperation(String),

    /// The log file could not be created.
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    /// A logger was already installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<SelectionError> for CliError {
    fn from(err: SelectionError) -> Self {
        CliError::Engine(err.into())
    }
}

impl From<CalendarError> for CliError {
    fn from(err: CalendarError) -> Self {
        CliError::Engine(err.into())
    }
}

impl From<PaginatorError> for CliError {
    fn from(err: PaginatorError) -> Self {
        CliError::Engine(err.into())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
