//! Dashboard category model
//!
//! Categories are spending buckets shown on the dashboard. They live only
//! in the session and are not linked to the categories typed on expenses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A spending bucket on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, unique within a board
    pub name: String,

    /// Amount budgeted for the category
    pub budget: Money,

    /// Amount spent in the category
    pub spent: Money,

    /// Accent color as a hex string
    pub color: String,
}

impl Category {
    /// Create a category with nothing budgeted or spent
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget: Money::zero(),
            spent: Money::zero(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Default dashboard categories with their colors
const DEFAULT_CATEGORIES: [(&str, &str); 4] = [
    ("Food", "#FF6B6B"),
    ("Transportation", "#4ECDC4"),
    ("Shopping", "#95E1D3"),
    ("Bills", "#FFA07A"),
];

/// The ordered set of categories shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBoard {
    categories: Vec<Category>,
}

impl CategoryBoard {
    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Remove a category by name; returns whether it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.name != name);
        self.categories.len() != before
    }
}

impl Default for CategoryBoard {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, color)| Category::new(*name, *color))
                .collect(),
        }
    }
}
