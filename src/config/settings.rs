//! User settings for Pocket Budget
//!
//! Manages display preferences: theme, currency, date format and how many
//! recent expenses the dashboard shows.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::DataPaths;
use crate::error::PocketError;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PocketError::Validation(format!(
                "Unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

/// User settings for Pocket Budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// Currency code or symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date format for expense timestamps (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of expenses listed under "Recent Expenses" on the dashboard
    #[serde(default = "default_recent_expense_count")]
    pub recent_expense_count: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "PHP".to_string()
}

/// Date format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Reject strftime patterns with unknown specifiers
pub fn validate_date_format(format: &str) -> Result<(), PocketError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PocketError::Config(format!(
            "Invalid date format '{}' in settings",
            format
        )));
    }
    Ok(())
}

fn default_recent_expense_count() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            currency: default_currency(),
            date_format: default_date_format(),
            recent_expense_count: default_recent_expense_count(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DataPaths) -> Result<Self, PocketError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            validate_date_format(&settings.date_format)?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DataPaths) -> Result<(), PocketError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PocketError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
