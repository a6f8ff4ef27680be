//! Expense model
//!
//! An expense is a single recorded outflow with a free-text category.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

use super::ids::ExpenseId;
use super::money::Money;
use crate::config::settings::DEFAULT_DATE_FORMAT;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation timestamp)
    pub id: ExpenseId,

    /// Spending category, as entered
    pub category: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense recorded now
    pub fn new(id: ExpenseId, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            category: category.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }

    /// Recording time in local time, formatted with a strftime pattern
    ///
    /// An invalid pattern falls back to the default date format.
    pub fn date_label(&self, format: &str) -> String {
        let local = self.created_at.with_timezone(&Local);
        let mut label = String::new();
        if write!(label, "{}", local.format(format)).is_err() {
            return local.format(DEFAULT_DATE_FORMAT).to_string();
        }
        label
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
