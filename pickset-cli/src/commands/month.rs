//! Month grid command
//!
//! Usage: pickset month [--year Y] [--month M] [--week-start DAY] [--no-adjacent] [--fixed]

use chrono::{Datelike, Local, Weekday};
use clap::Args;
use pickset_lib::calendar::{
    DatePartKind, FormatOptions, GridOptions, PartStyle, first_of_month, format_parts,
    month_from_index, month_grid, week_header,
};

use crate::env::Defaults;
use crate::error::Result;

const CELL_WIDTH: usize = 4;

#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Year (default: current year)
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month number 1-12 (default: current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// First column of the grid, e.g. mon or sunday (default: PICKSET_WEEK_START or sun)
    #[arg(long)]
    pub week_start: Option<Weekday>,

    /// Locale tag for labels (default: PICKSET_LOCALE or en)
    #[arg(long)]
    pub locale: Option<String>,

    /// Leave cells of the previous and next month blank
    #[arg(long)]
    pub no_adjacent: bool,

    /// Always print six weeks
    #[arg(long)]
    pub fixed: bool,
}

/// Execute month command
pub fn execute(args: MonthArgs, defaults: &Defaults) -> Result<()> {
    let today = Local::now().date_naive();
    let year = args.year.unwrap_or(today.year());
    let month0 = args.month.map(|m| m - 1).unwrap_or(today.month0());
    let month = month_from_index(month0)?;
    let week_start = args.week_start.or(defaults.week_start).unwrap_or(Weekday::Sun);
    let locale = args
        .locale
        .or_else(|| defaults.locale.clone())
        .unwrap_or_else(|| "en".to_string());

    let options = GridOptions::default()
        .with_week_start(week_start)
        .with_adjacent(!args.no_adjacent)
        .with_fixed_weeks(args.fixed);
    let grid = month_grid(year, month, options)?;
    log::debug!("{:?}", grid);

    let title = format_parts(
        first_of_month(year, month)?,
        &locale,
        &FormatOptions::new().with_month(PartStyle::Long),
        &[DatePartKind::Month, DatePartKind::Year],
    )?;
    let title: Vec<&str> = title.iter().map(|part| part.value.as_str()).collect();
    println!("{:^width$}", title.join(" "), width = CELL_WIDTH * 7);

    let header = week_header(&locale, PartStyle::Short, week_start)?;
    let header: String = header
        .iter()
        .map(|label| format!("{:>width$}", label, width = CELL_WIDTH))
        .collect();
    println!("{}", header);

    for week in &grid {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format!("{:>width$}", day.date.day(), width = CELL_WIDTH),
                None => " ".repeat(CELL_WIDTH),
            })
            .collect();
        println!("{}", row.trim_end());
    }

    Ok(())
}
