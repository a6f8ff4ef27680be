//! Per-user record bundle
//!
//! Everything a user owns besides their account: budgets, expenses and
//! goals. A bundle is created the first time the user logs in.

use serde::{Deserialize, Serialize};

use super::budget::BudgetSet;
use super::expense::Expense;
use super::goal::SavingsGoal;
use super::ids::ExpenseId;

/// Budgets, expenses and goals belonging to one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecords {
    #[serde(default)]
    pub budgets: BudgetSet,

    /// Newest first
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
}

impl UserRecords {
    /// Fresh records: zeroed budgets, no expenses, no goals
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an expense at the front of the list
    pub fn prepend_expense(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// Remove an expense by id, returning it if it was present
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Largest id in use by any expense or goal
    pub fn max_id(&self) -> Option<i64> {
        let expense_ids = self.expenses.iter().map(|e| e.id.raw());
        let goal_ids = self.goals.iter().map(|g| g.id.raw());
        expense_ids.chain(goal_ids).max()
    }
}
