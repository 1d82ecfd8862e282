//! Date range command
//!
//! Usage: pickset range <START> <END> [--skip-weekends] [--skip DATE]...

use chrono::NaiveDate;
use clap::Args;
use pickset_lib::calendar::{DateRangeDescriptor, generate_date_range, is_date_in_ranges};

use crate::error::Result;

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First date (YYYY-MM-DD)
    pub start: NaiveDate,

    /// Last date (YYYY-MM-DD), may be before START
    pub end: NaiveDate,

    /// Leave out Saturdays and Sundays
    #[arg(long)]
    pub skip_weekends: bool,

    /// Leave out a specific date (repeatable)
    #[arg(long = "skip", value_name = "DATE")]
    pub skip: Vec<NaiveDate>,
}

/// Execute range command
pub fn execute(args: RangeArgs) -> Result<()> {
    let mut excluded = Vec::new();
    if args.skip_weekends {
        excluded.push(DateRangeDescriptor::Weekends);
    }
    if !args.skip.is_empty() {
        excluded.push(DateRangeDescriptor::Specific { dates: args.skip });
    }

    let days = generate_date_range(args.start, args.end)?;
    log::info!("{} days from {} to {}", days.len(), args.start, args.end);

    for day in days.into_iter().filter(|d| !is_date_in_ranges(*d, &excluded)) {
        println!("{}", day);
    }
    Ok(())
}
