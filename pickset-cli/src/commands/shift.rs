//! Date shift command
//!
//! Usage: pickset shift <DATE> <UNIT> <AMOUNT>

use chrono::NaiveDate;
use clap::Args;
use pickset_lib::calendar::{TimeUnit, timedelta};

use crate::error::Result;

#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Date to shift (YYYY-MM-DD)
    pub date: NaiveDate,

    /// day, month or year (plurals accepted)
    pub unit: TimeUnit,

    /// Number of units, negative to go back
    #[arg(allow_negative_numbers = true)]
    pub amount: i32,
}

/// Execute shift command
pub fn execute(args: ShiftArgs) -> Result<()> {
    let shifted = timedelta(args.date, args.unit, args.amount)?;
    println!("{}", shifted);
    Ok(())
}
