use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Selection mode for the selection engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// Exactly one key at a time; selecting replaces
    Single,
    /// Any number of keys; selecting adds (Ctrl+click, Shift+range)
    Multiple,
}

impl SelectionMode {
    /// Whether selecting a key replaces the current selection.
    pub fn is_exclusive(&self) -> bool {
        matches!(self, SelectionMode::Single)
    }

    /// Whether any selection is allowed.
    pub fn allows_selection(&self) -> bool {
        !matches!(self, SelectionMode::None)
    }
}

impl FromStr for SelectionMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(SelectionMode::None),
            "single" => Ok(SelectionMode::Single),
            "multiple" | "multi" | "bistate" => Ok(SelectionMode::Multiple),
            _ => Err(SelectionError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionMode::None => "none",
            SelectionMode::Single => "single",
            SelectionMode::Multiple => "multiple",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("BiState".parse::<SelectionMode>().unwrap(), SelectionMode::Multiple);
        assert_eq!(" single ".parse::<SelectionMode>().unwrap(), SelectionMode::Single);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "cascade".parse::<SelectionMode>().unwrap_err();
        assert_eq!(err, SelectionError::InvalidMode("cascade".to_string()));
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [SelectionMode::None, SelectionMode::Single, SelectionMode::Multiple] {
            assert_eq!(mode.to_string().parse::<SelectionMode>().unwrap(), mode);
        }
    }
}
