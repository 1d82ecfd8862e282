//! Date range descriptors for disabled and special dates.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A set of dates described by a rule.
///
/// Serialized with a `type` tag, e.g.
/// `{"type": "between", "start": "2024-03-01", "end": "2024-03-10"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DateRangeDescriptor {
    /// Every date after `date` (exclusive).
    After {
        /// Boundary date.
        date: NaiveDate,
    },
    /// Every date before `date` (exclusive).
    Before {
        /// Boundary date.
        date: NaiveDate,
    },
    /// Every date from `start` to `end`, inclusive.
    Between {
        /// First date.
        start: NaiveDate,
        /// Last date.
        end: NaiveDate,
    },
    /// Exactly the listed dates.
    Specific {
        /// The dates.
        dates: Vec<NaiveDate>,
    },
    /// Monday to Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
}

impl DateRangeDescriptor {
    /// An inclusive range; the pair may be given in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        DateRangeDescriptor::Between { start, end }
    }

    /// The same descriptor with a `Between` pair in chronological order.
    ///
    /// Deserialized descriptors are not normalized until this is called;
    /// [`contains`](Self::contains) normalizes on the fly.
    pub fn normalized(self) -> Self {
        match self {
            DateRangeDescriptor::Between { start, end } => Self::between(start, end),
            other => other,
        }
    }

    /// Whether `date` is described by this rule.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateRangeDescriptor::After { date: boundary } => date > *boundary,
            DateRangeDescriptor::Before { date: boundary } => date < *boundary,
            DateRangeDescriptor::Between { start, end } => {
                let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
                date >= *lo && date <= *hi
            }
            DateRangeDescriptor::Specific { dates } => dates.contains(&date),
            DateRangeDescriptor::Weekdays => !is_weekend(date),
            DateRangeDescriptor::Weekends => is_weekend(date),
        }
    }
}

/// Whether any descriptor in `ranges` contains `date`.
pub fn is_date_in_ranges(date: NaiveDate, ranges: &[DateRangeDescriptor]) -> bool {
    ranges.iter().any(|range| range.contains(date))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
