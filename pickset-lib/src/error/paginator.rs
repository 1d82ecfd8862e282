//! Paginator error types

use thiserror::Error;

/// Errors raised by the paginator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginatorError {
    /// Records per page must be at least one.
    #[error("Invalid page size {0} (must be at least 1)")]
    InvalidPageSize(usize),
}
