//! Error types

mod calendar;
mod paginator;
mod selection;

pub use calendar::*;
pub use paginator::*;
pub use selection::*;

/// Top-level error for hosts that drive more than one engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Selection engine error.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Calendar engine error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Paginator error.
    #[error(transparent)]
    Paginator(#[from] PaginatorError),
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
