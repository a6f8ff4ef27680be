//! Dashboard view model

use crate::models::{BudgetLine, Category, Expense, Money, Period};

/// Everything the dashboard shows for the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub user_name: String,
    pub period: Period,
    pub budget: BudgetLine,
    pub categories: Vec<Category>,
    /// Newest first
    pub recent_expenses: Vec<Expense>,
}

impl Dashboard {
    pub fn remaining(&self) -> Money {
        self.budget.remaining()
    }
}
