//! Selection state for hierarchical and flat collections.
//!
//! The [`SelectionEngine`] tracks selected keys, computes added/removed
//! deltas and routes every mutating operation through a single handler that
//! may proceed, cancel or override the pending change. [`TreeSelection`]
//! hosts an engine over a tree of [`TreeItem`]s and supplies the visible
//! ordering used for range selection.

mod engine;
mod event;
mod mode;
pub mod tree;

pub use engine::*;
pub use event::*;
pub use mode::*;
pub use tree::{FlatNode, TreeItem, TreeSelection};
