//! Locale-aware date parts.
//!
//! Dates are formatted part by part (era, year, month, day, weekday) rather
//! than into one string, so hosts can arrange the parts freely.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Locale, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Rendering style of a single date part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartStyle {
    /// `2`, `2024`
    #[serde(rename = "numeric")]
    Numeric,
    /// `02`, `24`
    #[serde(rename = "2-digit")]
    TwoDigit,
    /// `Feb`, `Thu`, `AD`
    #[serde(rename = "short")]
    Short,
    /// `February`, `Thursday`, `Anno Domini`
    #[serde(rename = "long")]
    Long,
    /// `F`, `T`, `A`
    #[serde(rename = "narrow")]
    Narrow,
}

/// Which parts of a date to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePartKind {
    /// AD / BC
    Era,
    /// Year
    Year,
    /// Month
    Month,
    /// Day of month
    Day,
    /// Day of week
    Weekday,
}

impl DatePartKind {
    /// All part kinds in display order.
    pub const ALL: [DatePartKind; 5] = [
        DatePartKind::Era,
        DatePartKind::Year,
        DatePartKind::Month,
        DatePartKind::Day,
        DatePartKind::Weekday,
    ];
}

impl FromStr for DatePartKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "era" => Ok(DatePartKind::Era),
            "year" => Ok(DatePartKind::Year),
            "month" => Ok(DatePartKind::Month),
            "day" => Ok(DatePartKind::Day),
            "weekday" => Ok(DatePartKind::Weekday),
            _ => Err(CalendarError::InvalidDatePart(s.to_string())),
        }
    }
}

impl fmt::Display for DatePartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatePartKind::Era => "era",
            DatePartKind::Year => "year",
            DatePartKind::Month => "month",
            DatePartKind::Day => "day",
            DatePartKind::Weekday => "weekday",
        };
        f.write_str(name)
    }
}

/// Style per date part.
///
/// Defaults: day `numeric`, month `short`, weekday `short`, year `numeric`,
/// era `short`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Era style.
    pub era: PartStyle,
    /// Year style.
    pub year: PartStyle,
    /// Month style.
    pub month: PartStyle,
    /// Day style.
    pub day: PartStyle,
    /// Weekday style.
    pub weekday: PartStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            era: PartStyle::Short,
            year: PartStyle::Numeric,
            month: PartStyle::Short,
            day: PartStyle::Numeric,
            weekday: PartStyle::Short,
        }
    }
}

impl FormatOptions {
    /// Creates format options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year style.
    pub fn with_year(mut self, style: PartStyle) -> Self {
        self.year = style;
        self
    }

    /// Sets the month style.
    pub fn with_month(mut self, style: PartStyle) -> Self {
        self.month = style;
        self
    }

    /// Sets the day style.
    pub fn with_day(mut self, style: PartStyle) -> Self {
        self.day = style;
        self
    }

    /// Sets the weekday style.
    pub fn with_weekday(mut self, style: PartStyle) -> Self {
        self.weekday = style;
        self
    }

    /// Sets the era style.
    pub fn with_era(mut self, style: PartStyle) -> Self {
        self.era = style;
        self
    }

    /// Style for one part kind.
    pub fn style_for(&self, kind: DatePartKind) -> PartStyle {
        match kind {
            DatePartKind::Era => self.era,
            DatePartKind::Year => self.year,
            DatePartKind::Month => self.month,
            DatePartKind::Day => self.day,
            DatePartKind::Weekday => self.weekday,
        }
    }
}

/// One formatted part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePart {
    /// Which part this is.
    pub kind: DatePartKind,
    /// The localized text.
    pub value: String,
}

/// Formatted parts of one date, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    parts: Vec<DatePart>,
}

impl DateParts {
    /// Text of a part, if it was requested.
    pub fn get(&self, kind: DatePartKind) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.value.as_str())
    }

    /// Iterate the parts in request order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatePart> {
        self.parts.iter()
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts were requested.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl IntoIterator for DateParts {
    type Item = DatePart;
    type IntoIter = std::vec::IntoIter<DatePart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

/// Format the requested parts of `date` for a BCP-47 locale tag.
///
/// Repeated kinds are produced once.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pickset_lib::calendar::{format_parts, DatePartKind, FormatOptions, PartStyle};
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// let options = FormatOptions::new().with_month(PartStyle::Long);
/// let parts = format_parts(date, "en-US", &options, &[DatePartKind::Month, DatePartKind::Day]).unwrap();
/// assert_eq!(parts.get(DatePartKind::Month), Some("February"));
/// assert_eq!(parts.get(DatePartKind::Day), Some("29"));
/// ```
pub fn format_parts(
    date: NaiveDate,
    locale: &str,
    options: &FormatOptions,
    kinds: &[DatePartKind],
) -> Result<DateParts, CalendarError> {
    let (resolved, language) = resolve(locale)?;
    let mut parts: Vec<DatePart> = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        if parts.iter().any(|p| p.kind == kind) {
            continue;
        }
        parts.push(DatePart {
            kind,
            value: format_part(date, resolved, &language, kind, options.style_for(kind)),
        });
    }
    Ok(DateParts { parts })
}

/// Weekday labels in column order, starting at `week_start`.
pub fn week_header(locale: &str, style: PartStyle, week_start: Weekday) -> Result<Vec<String>, CalendarError> {
    let resolved = resolve_locale(locale)?;
    let mut day = week_start;
    let mut labels = Vec::with_capacity(7);
    for _ in 0..7 {
        labels.push(weekday_label(day, resolved, style));
        day = day.succ();
    }
    Ok(labels)
}

/// Localized name of a weekday.
pub fn weekday_label(weekday: Weekday, locale: Locale, style: PartStyle) -> String {
    // 2024-01-07 is a Sunday.
    let offset = u64::from(weekday.num_days_from_sunday());
    let date = NaiveDate::from_ymd_opt(2024, 1, 7)
        .and_then(|sunday| sunday.checked_add_days(chrono::Days::new(offset)))
        .unwrap_or_default();
    weekday_text(date, locale, style)
}

/// Map a BCP-47 tag (`en`, `de-DE`, `pt_BR`) to chrono locale data.
pub fn resolve_locale(tag: &str) -> Result<Locale, CalendarError> {
    resolve(tag).map(|(locale, _)| locale)
}

/// Locale data plus the lowercase language subtag.
fn resolve(tag: &str) -> Result<(Locale, String), CalendarError> {
    let unsupported = || CalendarError::UnsupportedLocale(tag.to_string());

    let mut subtags = tag.trim().split(['-', '_']).filter(|s| !s.is_empty());
    let language = subtags.next().ok_or_else(unsupported)?.to_ascii_lowercase();
    if language == "c" || language == "posix" {
        return Ok((Locale::POSIX, "en".to_string()));
    }
    let region = subtags
        .filter(|s| s.len() == 2 || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())))
        .last()
        .map(|s| s.to_ascii_uppercase());

    let candidate = match region {
        Some(region) => format!("{language}_{region}"),
        None => default_region(&language),
    };
    let locale = Locale::try_from(candidate.as_str()).map_err(|_| unsupported())?;
    Ok((locale, language))
}

/// Most common region for a bare language tag.
fn default_region(language: &str) -> String {
    let region = match language {
        "en" => "US",
        "ja" => "JP",
        "zh" => "CN",
        "ko" => "KR",
        "sv" => "SE",
        "da" => "DK",
        "cs" => "CZ",
        "el" => "GR",
        "uk" => "UA",
        "he" => "IL",
        "nb" => "NO",
        "hi" => "IN",
        "ar" => "SA",
        other => return format!("{other}_{}", other.to_ascii_uppercase()),
    };
    format!("{language}_{region}")
}

fn localized(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    date.and_time(NaiveTime::default())
        .and_utc()
        .format_localized(pattern, locale)
        .to_string()
}

fn narrow(text: String) -> String {
    text.chars().next().map(String::from).unwrap_or_default()
}

fn weekday_text(date: NaiveDate, locale: Locale, style: PartStyle) -> String {
    match style {
        PartStyle::Long => localized(date, "%A", locale),
        PartStyle::Narrow => narrow(localized(date, "%A", locale)),
        _ => localized(date, "%a", locale),
    }
}

fn format_part(date: NaiveDate, locale: Locale, language: &str, kind: DatePartKind, style: PartStyle) -> String {
    match kind {
        DatePartKind::Era => era(date, language, style),
        DatePartKind::Year => match style {
            PartStyle::TwoDigit => format!("{:02}", era_year(date) % 100),
            _ => era_year(date).to_string(),
        },
        DatePartKind::Month => match style {
            PartStyle::Numeric => date.month().to_string(),
            PartStyle::TwoDigit => format!("{:02}", date.month()),
            PartStyle::Short => localized(date, "%b", locale),
            PartStyle::Long => localized(date, "%B", locale),
            PartStyle::Narrow => narrow(localized(date, "%B", locale)),
        },
        DatePartKind::Day => match style {
            PartStyle::TwoDigit => format!("{:02}", date.day()),
            _ => date.day().to_string(),
        },
        DatePartKind::Weekday => weekday_text(date, locale, style),
    }
}

/// Year counted within its era: astronomical year 0 is 1 BC.
fn era_year(date: NaiveDate) -> i32 {
    let year = date.year();
    if year <= 0 { 1 - year } else { year }
}

/// Era names as `[long, short, narrow]`, before and after year 1.
type EraNames = ([&'static str; 3], [&'static str; 3]);

/// Gregorian era names per language. chrono carries no era data, so these
/// follow CLDR; unknown languages use English.
fn era_names(language: &str) -> EraNames {
    match language {
        "de" => (["v. Chr.", "v. Chr.", "v. Chr."], ["n. Chr.", "n. Chr.", "n. Chr."]),
        "fr" => (
            ["avant Jésus-Christ", "av. J.-C.", "av. J.-C."],
            ["après Jésus-Christ", "ap. J.-C.", "ap. J.-C."],
        ),
        "es" => (["antes de Cristo", "a. C.", "a. C."], ["después de Cristo", "d. C.", "d. C."]),
        "it" => (["avanti Cristo", "a.C.", "aC"], ["dopo Cristo", "d.C.", "dC"]),
        "pt" => (["antes de Cristo", "a.C.", "a.C."], ["depois de Cristo", "d.C.", "d.C."]),
        "nl" => (["voor Christus", "v.Chr.", "v.C."], ["na Christus", "n.Chr.", "n.C."]),
        _ => (["Before Christ", "BC", "B"], ["Anno Domini", "AD", "A"]),
    }
}

fn era(date: NaiveDate, language: &str, style: PartStyle) -> String {
    let (before, common) = era_names(language);
    let names = if date.year() > 0 { common } else { before };
    let text = match style {
        PartStyle::Long => names[0],
        PartStyle::Narrow => names[2],
        _ => names[1],
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        assert_eq!(default_region("en"), "en_US");
        assert_eq!(default_region("de"), "de_DE");
    }

    #[test]
    fn test_era_before_common_era() {
        let date = NaiveDate::from_ymd_opt(0, 6, 1).unwrap();
        assert_eq!(era(date, "en", PartStyle::Short), "BC");
        assert_eq!(era(date, "en", PartStyle::Long), "Before Christ");
        assert_eq!(era(date, "de", PartStyle::Short), "v. Chr.");
        assert_eq!(era_year(date), 1);
    }

    #[test]
    fn test_unknown_language_uses_english_eras() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(era(date, "ja", PartStyle::Short), "AD");
        assert_eq!(era(date, "ja", PartStyle::Narrow), "A");
    }
}
