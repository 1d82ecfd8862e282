//! Calendar state: view navigation and date selection.

use std::fmt;

use chrono::{Datelike, Local, Month, NaiveDate};
use log::{debug, trace};

use crate::error::CalendarError;

use super::config::CalendarConfig;
use super::date::{TimeUnit, first_of_month, generate_date_range, month_index, month_of, timedelta};
use super::format::{DatePartKind, DateParts, format_parts, resolve_locale, week_header};
use super::grid::{CalendarDay, GridOptions, MonthGrid};
use super::range::{DateRangeDescriptor, is_date_in_ranges};
use super::selection::{CalendarSelection, CalendarValue};

/// Handler called with the new value after every committed selection change.
pub type ChangeHandler = Box<dyn FnMut(&CalendarValue)>;

/// Which view the calendar shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalendarView {
    /// Month grid of days
    #[default]
    Days,
    /// The twelve months of the view year
    Year,
    /// A window of years around the view year
    Decade,
}

/// Headless calendar.
///
/// Holds the view date, the active view, the selection mode and value, and
/// the disabled/special date rules. Rendering is left to the host, which
/// feeds clicks back through [`click_day`](Self::click_day) or
/// [`select_date`](Self::select_date).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pickset_lib::calendar::{Calendar, CalendarConfig, CalendarSelection, CalendarValue};
///
/// let mut calendar = Calendar::new(CalendarConfig::new().with_selection(CalendarSelection::Range));
/// let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
///
/// calendar.select_date(d(12)).unwrap();
/// calendar.select_date(d(10)).unwrap();
/// assert_eq!(calendar.value(), &CalendarValue::Range(vec![d(10), d(11), d(12)]));
/// ```
pub struct Calendar {
    config: CalendarConfig,
    today: NaiveDate,
    view_date: NaiveDate,
    active_view: CalendarView,
    value: CalendarValue,
    /// First click of a range gesture has happened.
    range_started: bool,
    disabled_dates: Vec<DateRangeDescriptor>,
    special_dates: Vec<DateRangeDescriptor>,
    on_change: Option<ChangeHandler>,
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("config", &self.config)
            .field("today", &self.today)
            .field("view_date", &self.view_date)
            .field("active_view", &self.active_view)
            .field("value", &self.value)
            .field("range_started", &self.range_started)
            .field("disabled_dates", &self.disabled_dates)
            .field("special_dates", &self.special_dates)
            .finish_non_exhaustive()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(CalendarConfig::default())
    }
}

impl Calendar {
    /// Create a calendar viewing today's month.
    pub fn new(config: CalendarConfig) -> Self {
        let today = Local::now().date_naive();
        Self {
            value: CalendarValue::empty(config.selection),
            config,
            today,
            view_date: today,
            active_view: CalendarView::Days,
            range_started: false,
            disabled_dates: Vec::new(),
            special_dates: Vec::new(),
            on_change: None,
        }
    }

    /// Pin "today" (and the view date) to a fixed date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self.view_date = today;
        self
    }

    /// Call `handler` after every committed selection change.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&CalendarValue) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// The configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// The date treated as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // -------------------------------------------------------------------------
    // Selection mode
    // -------------------------------------------------------------------------

    /// Current selection mode.
    pub fn selection(&self) -> CalendarSelection {
        self.value.mode()
    }

    /// Switch the selection mode.
    ///
    /// Resets the value to the mode's empty value and drops a pending range,
    /// even when the mode does not change.
    pub fn set_selection(&mut self, mode: CalendarSelection) {
        debug!("calendar selection mode -> {mode}");
        self.config.selection = mode;
        self.range_started = false;
        self.value = CalendarValue::empty(mode);
        self.notify();
    }

    /// Switch the selection mode by name. Unknown names keep the current
    /// mode and value.
    pub fn set_selection_str(&mut self, mode: &str) -> Result<(), CalendarError> {
        let mode = mode.parse::<CalendarSelection>()?;
        self.set_selection(mode);
        Ok(())
    }

    /// The selected date(s).
    pub fn value(&self) -> &CalendarValue {
        &self.value
    }

    /// Whether the first click of a range has happened and the second has not.
    pub fn range_started(&self) -> bool {
        self.range_started
    }

    /// Replace the value without notifying the change handler.
    ///
    /// The mode follows the value.
    pub fn write_value(&mut self, value: CalendarValue) {
        self.config.selection = value.mode();
        self.range_started = false;
        self.value = value;
    }

    // -------------------------------------------------------------------------
    // Selecting
    // -------------------------------------------------------------------------

    /// Select a date the way a click on it would.
    ///
    /// Single: the date becomes the value. Multi: the date is toggled.
    /// Range: the first click sets the anchor, the second commits every day
    /// between the two, clicking the anchor again clears. Disabled dates are
    /// ignored.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        if self.is_disabled(date) {
            debug!("ignoring click on disabled date {date}");
            return Ok(());
        }

        match self.selection() {
            CalendarSelection::Single => {
                self.value = CalendarValue::Single(Some(date));
            }
            CalendarSelection::Multi => {
                let mut dates = self.value.dates();
                if let Some(pos) = dates.iter().position(|d| *d == date) {
                    dates.remove(pos);
                } else {
                    dates.push(date);
                    dates.sort_unstable();
                }
                self.value = CalendarValue::Multi(dates);
            }
            CalendarSelection::Range => self.range_click(date)?,
        }

        self.notify();
        Ok(())
    }

    /// Select several dates at once.
    ///
    /// Single: the last date wins. Multi: the dates are added. Range: the
    /// earliest and latest date bound the committed range.
    pub fn select_dates(&mut self, dates: &[NaiveDate]) -> Result<(), CalendarError> {
        match self.selection() {
            CalendarSelection::Single => {
                let Some(last) = dates.iter().rev().find(|d| !self.is_disabled(**d)) else {
                    return Ok(());
                };
                self.value = CalendarValue::Single(Some(*last));
            }
            CalendarSelection::Multi => {
                let mut selected = self.value.dates();
                selected.extend(dates.iter().copied().filter(|d| !self.is_disabled(*d)));
                selected.sort_unstable();
                selected.dedup();
                self.value = CalendarValue::Multi(selected);
            }
            CalendarSelection::Range => {
                let (Some(start), Some(end)) = (dates.iter().min(), dates.iter().max()) else {
                    return Ok(());
                };
                self.range_started = false;
                self.value = CalendarValue::Range(generate_date_range(*start, *end)?);
            }
        }

        self.notify();
        Ok(())
    }

    /// Handle a click on a grid cell.
    ///
    /// Cells of the adjacent months move the view to that month first.
    pub fn click_day(&mut self, day: CalendarDay) -> Result<(), CalendarError> {
        if day.is_prev_month {
            self.previous_month()?;
        }
        if day.is_next_month {
            self.next_month()?;
        }
        self.select_date(day.date)
    }

    fn range_click(&mut self, date: NaiveDate) -> Result<(), CalendarError> {
        if !self.range_started {
            self.range_started = true;
            self.value = CalendarValue::Range(vec![date]);
            return Ok(());
        }

        self.range_started = false;
        let anchor = self.value.dates().first().copied();
        self.value = match anchor {
            Some(anchor) if anchor == date => {
                trace!("range anchor clicked again, clearing");
                CalendarValue::Range(Vec::new())
            }
            Some(anchor) => CalendarValue::Range(generate_date_range(anchor, date)?),
            None => {
                self.range_started = true;
                CalendarValue::Range(vec![date])
            }
        };
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.value);
        }
    }

    // -------------------------------------------------------------------------
    // Disabled and special dates
    // -------------------------------------------------------------------------

    /// Dates that cannot be selected.
    pub fn disabled_dates(&self) -> &[DateRangeDescriptor] {
        &self.disabled_dates
    }

    /// Set the dates that cannot be selected.
    pub fn set_disabled_dates(&mut self, ranges: Vec<DateRangeDescriptor>) {
        self.disabled_dates = ranges.into_iter().map(DateRangeDescriptor::normalized).collect();
    }

    /// Dates the host highlights.
    pub fn special_dates(&self) -> &[DateRangeDescriptor] {
        &self.special_dates
    }

    /// Set the dates the host highlights.
    pub fn set_special_dates(&mut self, ranges: Vec<DateRangeDescriptor>) {
        self.special_dates = ranges.into_iter().map(DateRangeDescriptor::normalized).collect();
    }

    /// Whether `date` is disabled.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        is_date_in_ranges(date, &self.disabled_dates)
    }

    /// Whether `date` is special.
    pub fn is_special(&self, date: NaiveDate) -> bool {
        is_date_in_ranges(date, &self.special_dates)
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// The date whose month is shown.
    pub fn view_date(&self) -> NaiveDate {
        self.view_date
    }

    /// Show the month of `date`.
    pub fn set_view_date(&mut self, date: NaiveDate) {
        self.view_date = date;
    }

    /// The active view.
    pub fn active_view(&self) -> CalendarView {
        self.active_view
    }

    /// Show the twelve months of the view year.
    pub fn activate_year_view(&mut self) {
        self.active_view = CalendarView::Year;
    }

    /// Show the years around the view year.
    pub fn activate_decade_view(&mut self) {
        self.active_view = CalendarView::Decade;
    }

    /// Move the view one month back.
    pub fn previous_month(&mut self) -> Result<(), CalendarError> {
        self.view_date = timedelta(self.view_date, TimeUnit::Month, -1)?;
        Ok(())
    }

    /// Move the view one month forward.
    pub fn next_month(&mut self) -> Result<(), CalendarError> {
        self.view_date = timedelta(self.view_date, TimeUnit::Month, 1)?;
        Ok(())
    }

    /// Move the view one year back.
    pub fn previous_year(&mut self) -> Result<(), CalendarError> {
        self.view_date = timedelta(self.view_date, TimeUnit::Year, -1)?;
        Ok(())
    }

    /// Move the view one year forward.
    pub fn next_year(&mut self) -> Result<(), CalendarError> {
        self.view_date = timedelta(self.view_date, TimeUnit::Year, 1)?;
        Ok(())
    }

    /// Pick a month in the year view: jump to its first day and show days.
    pub fn change_month(&mut self, month: Month) -> Result<(), CalendarError> {
        self.view_date = first_of_month(self.view_date.year(), month)?;
        self.active_view = CalendarView::Days;
        Ok(())
    }

    /// Pick a year in the decade view: jump to the view month's first day in
    /// that year and show days.
    pub fn change_year(&mut self, year: i32) -> Result<(), CalendarError> {
        self.view_date = first_of_month(year, month_of(self.view_date))?;
        self.active_view = CalendarView::Days;
        Ok(())
    }

    /// Scroll the decade view by `delta` years (wheel or pan).
    ///
    /// The view year never scrolls further than the configured limit from
    /// the current year; a larger `delta` stops at the edge. A view already
    /// outside the window can still scroll back toward it. Returns whether
    /// the view moved.
    pub fn scroll_years(&mut self, delta: i32) -> Result<bool, CalendarError> {
        let limit = i64::from(self.config.year_scroll_limit);
        let today = i64::from(self.today.year());
        let current = i64::from(self.view_date.year());
        let target = current + i64::from(delta);
        let target = if delta > 0 {
            target.min((today + limit).max(current))
        } else {
            target.max((today - limit).min(current))
        };
        if target == current {
            trace!("year scroll stopped at {}", current);
            return Ok(false);
        }
        let step = i32::try_from(target - current)
            .map_err(|_| CalendarError::DateOutOfRange(target.to_string()))?;
        self.view_date = timedelta(self.view_date, TimeUnit::Year, step)?;
        Ok(true)
    }

    /// First day of each month of the view year.
    pub fn months(&self) -> Result<Vec<NaiveDate>, CalendarError> {
        let mut month = first_of_month(self.view_date.year(), Month::January)?;
        let mut months = Vec::with_capacity(12);
        for _ in 0..12 {
            months.push(month);
            month = timedelta(month, TimeUnit::Month, 1)?;
        }
        Ok(months)
    }

    /// Years listed in the decade view: three either side of the view year.
    pub fn decade(&self) -> Vec<i32> {
        let year = self.view_date.year();
        (year - 3..=year + 3).collect()
    }

    /// Whether `date` is in the view month.
    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        date.month() == self.view_date.month()
    }

    /// Whether `date` is in the view year.
    pub fn is_current_year(&self, date: NaiveDate) -> bool {
        date.year() == self.view_date.year()
    }

    /// The grid of the view month.
    pub fn month_grid(&self) -> Result<MonthGrid, CalendarError> {
        MonthGrid::new(
            self.view_date.year(),
            month_of(self.view_date),
            GridOptions::default().with_week_start(self.config.week_start),
        )
    }

    // -------------------------------------------------------------------------
    // Labels
    // -------------------------------------------------------------------------

    /// Weekday labels of the grid columns.
    pub fn week_header(&self) -> Result<Vec<String>, CalendarError> {
        week_header(
            &self.config.locale,
            self.config.format_options.weekday,
            self.config.week_start,
        )
    }

    /// Every date part of `date` with the configured locale and styles.
    pub fn format_parts(&self, date: NaiveDate) -> Result<DateParts, CalendarError> {
        format_parts(
            date,
            &self.config.locale,
            &self.config.format_options,
            &DatePartKind::ALL,
        )
    }

    /// Month label for the year view.
    ///
    /// Without month formatting this is the one-based month number.
    pub fn formatted_month(&self, date: NaiveDate) -> Result<String, CalendarError> {
        if self.config.format_views.month {
            self.single_part(date, DatePartKind::Month)
        } else {
            Ok((month_index(month_of(date)) + 1).to_string())
        }
    }

    /// Day label for the month view.
    pub fn formatted_day(&self, date: NaiveDate) -> Result<String, CalendarError> {
        if self.config.format_views.day {
            self.single_part(date, DatePartKind::Day)
        } else {
            Ok(date.day().to_string())
        }
    }

    /// Year label for the decade view.
    pub fn formatted_year(&self, date: NaiveDate) -> Result<String, CalendarError> {
        if self.config.format_views.year {
            self.single_part(date, DatePartKind::Year)
        } else {
            Ok(date.year().to_string())
        }
    }

    /// Set the locale tag. Unsupported tags are rejected and the current
    /// locale is kept.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), CalendarError> {
        resolve_locale(locale)?;
        self.config.locale = locale.to_string();
        Ok(())
    }

    fn single_part(&self, date: NaiveDate, kind: DatePartKind) -> Result<String, CalendarError> {
        let parts = format_parts(date, &self.config.locale, &self.config.format_options, &[kind])?;
        Ok(parts.get(kind).unwrap_or_default().to_string())
    }
}
