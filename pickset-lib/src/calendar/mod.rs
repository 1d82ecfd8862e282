//! Calendar date engine.
//!
//! Pure date arithmetic ([`timedelta`], [`generate_date_range`]), month grids
//! ([`MonthGrid`]), part-wise locale formatting ([`format_parts`]) and the
//! headless [`Calendar`] with its single/multi/range selection state machine.

mod config;
mod date;
mod format;
mod grid;
mod range;
mod selection;
mod state;

pub use config::*;
pub use date::*;
pub use format::*;
pub use grid::*;
pub use range::*;
pub use selection::*;
pub use state::*;
