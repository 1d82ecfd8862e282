//! Calendar engine error types

use thiserror::Error;

/// Errors raised by the calendar date engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The calendar selection mode string is not recognised.
    /// The previous mode is kept.
    #[error("Invalid selection value '{0}' (expected single, multi or range)")]
    InvalidSelectionMode(String),

    /// The time unit string is not one of `day`, `month` or `year`.
    #[error("Invalid time unit '{0}' (expected day, month or year)")]
    InvalidUnit(String),

    /// The date part name is not one of `era`, `year`, `month`, `day` or
    /// `weekday`.
    #[error("Invalid date part '{0}' (expected era, year, month, day or weekday)")]
    InvalidDatePart(String),

    /// Year, zero-based month and day do not form a calendar date.
    #[error("Invalid date: year {year}, month index {month0}, day {day}")]
    InvalidDate {
        /// Proleptic Gregorian year.
        year: i32,
        /// Zero-based month index.
        month0: u32,
        /// Day of month.
        day: u32,
    },

    /// A zero-based month index outside `0..=11`.
    #[error("Invalid month index {0} (expected 0..=11)")]
    InvalidMonthIndex(u32),

    /// Date arithmetic left the representable date range.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    /// The BCP-47 locale tag has no locale data.
    #[error("Unsupported locale '{0}'")]
    UnsupportedLocale(String),
}
