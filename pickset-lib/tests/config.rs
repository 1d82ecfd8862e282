//! Tests for configuration defaults and JSON (de)serialization.

use chrono::{NaiveDate, Weekday};
use pickset_lib::calendar::{
    CalendarConfig, CalendarSelection, CalendarValue, DEFAULT_YEAR_SCROLL_LIMIT, FormatOptions,
    FormatViews, PartStyle,
};
use pickset_lib::selection::SelectionMode;
use pickset_lib::{Error, error::CalendarError};

#[test]
fn test_calendar_config_defaults() {
    let config = CalendarConfig::default();
    assert_eq!(config.week_start, Weekday::Sun);
    assert_eq!(config.locale, "en");
    assert_eq!(config.selection, CalendarSelection::Single);
    assert_eq!(config.year_scroll_limit, DEFAULT_YEAR_SCROLL_LIMIT);
    assert_eq!(
        config.format_views,
        FormatViews {
            day: false,
            month: true,
            year: false
        }
    );
    assert_eq!(config.format_options.month, PartStyle::Short);
    assert_eq!(config.format_options.day, PartStyle::Numeric);
}

#[test]
fn test_calendar_config_partial_json() {
    let json = r#"{
        "week_start": "Mon",
        "locale": "de-DE",
        "format_options": {"month": "long", "year": "2-digit"},
        "selection": "range"
    }"#;
    let config: CalendarConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.week_start, Weekday::Mon);
    assert_eq!(config.locale, "de-DE");
    assert_eq!(config.selection, CalendarSelection::Range);
    assert_eq!(
        config.format_options,
        FormatOptions::new()
            .with_month(PartStyle::Long)
            .with_year(PartStyle::TwoDigit)
    );
    assert_eq!(config.format_views, FormatViews::default());
    assert_eq!(config.year_scroll_limit, DEFAULT_YEAR_SCROLL_LIMIT);
}

#[test]
fn test_calendar_config_round_trip() {
    let config = CalendarConfig::new()
        .with_week_start(Weekday::Sat)
        .with_locale("fr-FR")
        .with_selection(CalendarSelection::Multi)
        .with_year_scroll_limit(10);

    let json = serde_json::to_string(&config).unwrap();
    let parsed: CalendarConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_calendar_value_json() {
    let value = CalendarValue::Range(vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()]);
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json, serde_json::json!({"mode": "range", "value": ["2024-03-01"]}));

    let empty: CalendarValue = serde_json::from_str(r#"{"mode": "single", "value": null}"#).unwrap();
    assert_eq!(empty, CalendarValue::Single(None));
}

#[test]
fn test_selection_mode_json() {
    let mode: SelectionMode = serde_json::from_str(r#""multiple""#).unwrap();
    assert_eq!(mode, SelectionMode::Multiple);
    assert!(serde_json::from_str::<SelectionMode>(r#""cascading""#).is_err());
}

#[test]
fn test_errors_convert_to_crate_error() {
    let err: Error = CalendarError::UnsupportedLocale("zz".to_string()).into();
    assert!(matches!(err, Error::Calendar(_)));
    assert!(err.to_string().contains("zz"));

    let parsed: pickset_lib::Result<SelectionMode> = "cascading".parse::<SelectionMode>().map_err(Error::from);
    assert!(matches!(parsed, Err(Error::Selection(_))));
}
