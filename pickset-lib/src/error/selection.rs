//! Selection engine error types

use thiserror::Error;

/// Errors raised by the selection engine.
///
/// Range selection over keys that are missing from the visible ordering is
/// not an error: the engine degrades to a single selection of the target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selection mode string is not recognised. The previous mode is kept.
    #[error("Invalid selection mode '{0}' (expected none, single or multiple)")]
    InvalidMode(String),
}
