//! Month grids.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use crate::error::CalendarError;

use super::date::{days_in_month, first_of_month};

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    /// The date in the cell.
    pub date: NaiveDate,
    /// The date belongs to the month before the grid's month.
    pub is_prev_month: bool,
    /// The date belongs to the month after the grid's month.
    pub is_next_month: bool,
}

impl CalendarDay {
    /// Whether the date belongs to the grid's month.
    pub fn is_current_month(&self) -> bool {
        !self.is_prev_month && !self.is_next_month
    }

    /// Whether the date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// A week row: seven cells in column order. Cells outside the month are
/// `None` unless adjacent days are included.
pub type Week = [Option<CalendarDay>; 7];

/// How a month grid is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Weekday of the first column.
    pub week_start: Weekday,
    /// Fill leading/trailing cells with days of the adjacent months.
    pub include_adjacent: bool,
    /// Always produce six rows so consecutive months have the same height.
    pub fixed_weeks: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            include_adjacent: true,
            fixed_weeks: false,
        }
    }
}

impl GridOptions {
    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets whether adjacent-month days fill the first and last week.
    pub fn with_adjacent(mut self, include_adjacent: bool) -> Self {
        self.include_adjacent = include_adjacent;
        self
    }

    /// Sets whether the grid always has six rows.
    pub fn with_fixed_weeks(mut self, fixed_weeks: bool) -> Self {
        self.fixed_weeks = fixed_weeks;
        self
    }
}

/// The complete weeks covering one month.
///
/// Cheap to copy. Iterating is lazy and can be restarted any number of times
/// through [`MonthGrid::weeks`] or `&grid` in a `for` loop.
///
/// # Example
///
/// ```
/// use chrono::Month;
/// use pickset_lib::calendar::{month_grid, GridOptions};
///
/// let grid = month_grid(2024, Month::February, GridOptions::default()).unwrap();
/// for week in &grid {
///     assert_eq!(week.len(), 7);
/// }
/// assert_eq!(grid.weeks().count(), grid.rows());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    first: NaiveDate,
    last: NaiveDate,
    /// Date of the top-left cell.
    origin: NaiveDate,
    rows: usize,
    options: GridOptions,
}

/// Build the grid for a month.
pub fn month_grid(year: i32, month: Month, options: GridOptions) -> Result<MonthGrid, CalendarError> {
    MonthGrid::new(year, month, options)
}

impl MonthGrid {
    /// Build the grid for a month.
    ///
    /// Fails when the month or its filler days fall outside the
    /// representable date range.
    pub fn new(year: i32, month: Month, options: GridOptions) -> Result<Self, CalendarError> {
        let first = first_of_month(year, month)?;
        let length = days_in_month(year, month)?;
        let out_of_range = || {
            CalendarError::DateOutOfRange(format!("grid for {year}-{:02}", month.number_from_month()))
        };

        let last = first
            .checked_add_days(Days::new(u64::from(length - 1)))
            .ok_or_else(out_of_range)?;

        let leading = (first.weekday().num_days_from_monday() + 7
            - options.week_start.num_days_from_monday())
            % 7;
        let rows = if options.fixed_weeks {
            6
        } else {
            ((leading + length) as usize).div_ceil(7)
        };

        let origin = first
            .checked_sub_days(Days::new(u64::from(leading)))
            .ok_or_else(out_of_range)?;
        // The bottom-right cell must exist too.
        origin
            .checked_add_days(Days::new((rows * 7 - 1) as u64))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            year,
            month,
            first,
            last,
            origin,
            rows,
            options,
        })
    }

    /// Year of the grid's month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The grid's month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of week rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Layout options the grid was built with.
    pub fn options(&self) -> GridOptions {
        self.options
    }

    /// Whether `date` is a day of the grid's month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last
    }

    /// Iterate the week rows from the top.
    pub fn weeks(&self) -> Weeks {
        Weeks {
            grid: *self,
            row: 0,
        }
    }

    /// Iterate every present cell, row by row.
    pub fn days(&self) -> impl Iterator<Item = CalendarDay> + Clone + '_ {
        self.weeks().flat_map(|week| week.into_iter().flatten())
    }

    fn cell(&self, index: usize) -> Option<CalendarDay> {
        let date = self.origin.checked_add_days(Days::new(index as u64))?;
        let day = CalendarDay {
            date,
            is_prev_month: date < self.first,
            is_next_month: date > self.last,
        };
        if day.is_current_month() || self.options.include_adjacent {
            Some(day)
        } else {
            None
        }
    }
}

impl IntoIterator for &MonthGrid {
    type Item = Week;
    type IntoIter = Weeks;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks()
    }
}

/// Iterator over the week rows of a [`MonthGrid`].
#[derive(Debug, Clone)]
pub struct Weeks {
    grid: MonthGrid,
    row: usize,
}

impl Iterator for Weeks {
    type Item = Week;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.grid.rows {
            return None;
        }
        let base = self.row * 7;
        self.row += 1;
        Some(std::array::from_fn(|col| self.grid.cell(base + col)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.rows.saturating_sub(self.row);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Weeks {}

impl FusedIterator for Weeks {}
