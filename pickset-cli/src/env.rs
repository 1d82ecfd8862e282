//! Defaults read from the environment (and `.env`).

use chrono::Weekday;
use simplelog::LevelFilter;

/// Locale tag used when `--locale` is not given.
pub const LOCALE_VAR: &str = "PICKSET_LOCALE";

/// First weekday used when `--week-start` is not given.
pub const WEEK_START_VAR: &str = "PICKSET_WEEK_START";

/// Log level used when no `-v` flag is given.
pub const LOG_VAR: &str = "PICKSET_LOG";

/// Calendar defaults from the environment. Flags override these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub locale: Option<String>,
    pub week_start: Option<Weekday>,
}

impl Defaults {
    /// Read defaults. Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let locale = std::env::var(LOCALE_VAR).ok().filter(|v| !v.trim().is_empty());
        let week_start = std::env::var(WEEK_START_VAR)
            .ok()
            .and_then(|v| match v.parse::<Weekday>() {
                Ok(day) => Some(day),
                Err(_) => {
                    log::warn!("ignoring {}={:?}: not a weekday", WEEK_START_VAR, v);
                    None
                }
            });
        Self { locale, week_start }
    }
}

/// Log level from `PICKSET_LOG`, if set and valid.
pub fn log_level() -> Option<LevelFilter> {
    std::env::var(LOG_VAR).ok()?.parse().ok()
}
