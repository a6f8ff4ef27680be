//! Budget period representation
//!
//! Budgets are kept for three rolling windows: today, this week and this
//! month.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A budgeting time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
}

impl Period {
    /// All periods in display order
    pub const ALL: [Period; 3] = [Period::Today, Period::Week, Period::Month];

    /// Lowercase key, as used on the command line and in storage
    pub fn key(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Capitalized label for headings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "day" | "daily" => Ok(Self::Today),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when a period key is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown period '{}' (expected today, week or month)",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
