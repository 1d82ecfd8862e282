//! Headless selection, calendar and paging engines.
//!
//! The engines hold the state behind tree, calendar and paginator widgets
//! without rendering anything. Hosts forward user interactions into them and
//! render what they return.

pub mod calendar;
pub mod error;
pub mod paginator;
pub mod selection;

pub use error::{Error, Result};
