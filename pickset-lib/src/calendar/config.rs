//! Calendar configuration

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::format::FormatOptions;
use super::selection::CalendarSelection;

/// Years the view may scroll away from the current year, either direction.
pub const DEFAULT_YEAR_SCROLL_LIMIT: u32 = 95;

/// Which labels are rendered with locale formatting instead of plain numbers.
///
/// Default: only the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatViews {
    /// Day labels in the month view.
    pub day: bool,
    /// Month labels in the year view.
    pub month: bool,
    /// Year labels in the decade view.
    pub year: bool,
}

impl Default for FormatViews {
    fn default() -> Self {
        Self {
            day: false,
            month: true,
            year: false,
        }
    }
}

/// Configuration for a [`Calendar`](super::Calendar).
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use pickset_lib::calendar::{CalendarConfig, CalendarSelection};
///
/// let config = CalendarConfig::default()
///     .with_week_start(Weekday::Mon)
///     .with_locale("de-DE")
///     .with_selection(CalendarSelection::Range);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First column of the month grid.
    ///
    /// Default: Sunday
    pub week_start: Weekday,

    /// BCP-47 locale tag for labels.
    ///
    /// Default: `en`
    pub locale: String,

    /// Style of each date part.
    pub format_options: FormatOptions,

    /// Which labels use locale formatting.
    pub format_views: FormatViews,

    /// Initial selection mode.
    ///
    /// Default: single
    pub selection: CalendarSelection,

    /// How many years the view may scroll from the current year.
    ///
    /// Default: 95
    pub year_scroll_limit: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            locale: "en".to_string(),
            format_options: FormatOptions::default(),
            format_views: FormatViews::default(),
            selection: CalendarSelection::default(),
            year_scroll_limit: DEFAULT_YEAR_SCROLL_LIMIT,
        }
    }
}

impl CalendarConfig {
    /// Creates a new calendar config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets the locale tag.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the date part styles.
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    /// Sets which labels use locale formatting.
    pub fn with_format_views(mut self, views: FormatViews) -> Self {
        self.format_views = views;
        self
    }

    /// Sets the initial selection mode.
    pub fn with_selection(mut self, selection: CalendarSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the year scroll limit.
    pub fn with_year_scroll_limit(mut self, years: u32) -> Self {
        self.year_scroll_limit = years;
        self
    }
}
