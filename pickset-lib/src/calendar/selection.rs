//! Calendar selection modes and values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// How clicks on days select dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSelection {
    /// One date at a time
    #[default]
    Single,
    /// Any number of dates, each click toggles
    Multi,
    /// A contiguous run of days chosen by two clicks
    Range,
}

impl FromStr for CalendarSelection {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(CalendarSelection::Single),
            "multi" | "multiple" => Ok(CalendarSelection::Multi),
            "range" => Ok(CalendarSelection::Range),
            _ => Err(CalendarError::InvalidSelectionMode(s.to_string())),
        }
    }
}

impl fmt::Display for CalendarSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalendarSelection::Single => "single",
            CalendarSelection::Multi => "multi",
            CalendarSelection::Range => "range",
        };
        f.write_str(name)
    }
}

/// The selected date(s) of a calendar, shaped by its selection mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum CalendarValue {
    /// Single mode: the selected date, if any.
    Single(Option<NaiveDate>),
    /// Multi mode: selected dates in chronological order.
    Multi(Vec<NaiveDate>),
    /// Range mode: every day of the range in chronological order. Holds only
    /// the anchor while a range is pending.
    Range(Vec<NaiveDate>),
}

impl CalendarValue {
    /// The empty value of a mode.
    pub fn empty(mode: CalendarSelection) -> Self {
        match mode {
            CalendarSelection::Single => CalendarValue::Single(None),
            CalendarSelection::Multi => CalendarValue::Multi(Vec::new()),
            CalendarSelection::Range => CalendarValue::Range(Vec::new()),
        }
    }

    /// The mode this value belongs to.
    pub fn mode(&self) -> CalendarSelection {
        match self {
            CalendarValue::Single(_) => CalendarSelection::Single,
            CalendarValue::Multi(_) => CalendarSelection::Multi,
            CalendarValue::Range(_) => CalendarSelection::Range,
        }
    }

    /// All selected dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            CalendarValue::Single(date) => date.iter().copied().collect(),
            CalendarValue::Multi(dates) | CalendarValue::Range(dates) => dates.clone(),
        }
    }

    /// Whether `date` is selected.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            CalendarValue::Single(selected) => *selected == Some(date),
            CalendarValue::Multi(dates) | CalendarValue::Range(dates) => dates.contains(&date),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            CalendarValue::Single(date) => date.is_none(),
            CalendarValue::Multi(dates) | CalendarValue::Range(dates) => dates.is_empty(),
        }
    }
}
