//! Date arithmetic.
//!
//! Month indices are zero-based wherever a plain integer is used, and such
//! parameters are always named `month0`. Public signatures otherwise take
//! [`chrono::Month`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Unit for [`timedelta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Calendar days
    Day,
    /// Calendar months, clamped to the last valid day
    Month,
    /// Calendar years, clamped to the last valid day (Feb 29 → Feb 28)
    Year,
}

impl FromStr for TimeUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(TimeUnit::Day),
            "month" | "months" => Ok(TimeUnit::Month),
            "year" | "years" => Ok(TimeUnit::Year),
            _ => Err(CalendarError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        };
        f.write_str(name)
    }
}

/// Shift `date` by `amount` units.
///
/// Month and year shifts keep the day of month when it exists in the target
/// month and otherwise land on its last day, so Jan 31 + 1 month is the last
/// day of February.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pickset_lib::calendar::{timedelta, TimeUnit};
///
/// let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// let feb = timedelta(jan31, TimeUnit::Month, 1).unwrap();
/// assert_eq!(feb, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
/// ```
pub fn timedelta(date: NaiveDate, unit: TimeUnit, amount: i32) -> Result<NaiveDate, CalendarError> {
    let shifted = match unit {
        TimeUnit::Day => shift_days(date, i64::from(amount)),
        TimeUnit::Month => shift_months(date, i64::from(amount)),
        TimeUnit::Year => shift_months(date, i64::from(amount) * 12),
    };
    shifted.ok_or_else(|| CalendarError::DateOutOfRange(format!("{date} {amount:+} {unit}")))
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(delta)
    } else {
        date.checked_sub_days(delta)
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let delta = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

/// Every day from `start` to `end` inclusive, in chronological order.
///
/// The pair may be given in either order.
pub fn generate_date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
    let (mut current, end) = if start <= end { (start, end) } else { (end, start) };
    let mut days = Vec::with_capacity(usize::try_from((end - current).num_days() + 1).unwrap_or(0));
    days.push(current);
    while current < end {
        current = timedelta(current, TimeUnit::Day, 1)?;
        days.push(current);
    }
    Ok(days)
}

/// Build a date from a year, a zero-based month index and a day of month.
pub fn date_from_parts(year: i32, month0: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or(CalendarError::InvalidDate { year, month0, day })
}

/// The month for a zero-based index.
pub fn month_from_index(month0: u32) -> Result<Month, CalendarError> {
    usize::try_from(month0)
        .ok()
        .and_then(|i| MONTHS.get(i).copied())
        .ok_or(CalendarError::InvalidMonthIndex(month0))
}

/// The zero-based index of a month.
pub fn month_index(month: Month) -> u32 {
    month.number_from_month() - 1
}

/// The month a date falls in.
pub fn month_of(date: NaiveDate) -> Month {
    MONTHS[date.month0() as usize]
}

/// First day of the given month.
pub fn first_of_month(year: i32, month: Month) -> Result<NaiveDate, CalendarError> {
    date_from_parts(year, month_index(month), 1)
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: Month) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    let next = timedelta(first, TimeUnit::Month, 1)?;
    Ok(u32::try_from((next - first).num_days()).unwrap_or(0))
}
