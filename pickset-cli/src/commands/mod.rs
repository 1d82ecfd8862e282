//! Subcommands

pub mod month;
pub mod pages;
pub mod range;
pub mod select;
pub mod shift;
