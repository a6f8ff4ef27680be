//! Budget service
//!
//! Reads and edits a user's per-period budget totals.

use crate::audit::EntityType;
use crate::error::{PocketError, PocketResult};
use crate::models::{BudgetSet, Money, Period, UserId};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get a user's budgets
    pub fn budgets(&self, user_id: UserId) -> PocketResult<BudgetSet> {
        self.storage.records.budgets(user_id)
    }

    /// Set the total for one period from user input
    ///
    /// Fails with `InvalidAmount` unless the input is a positive number.
    /// `spent` is left as it was.
    ///
    /// The change is made in memory before it is saved. If the save or the
    /// audit write fails, the error is returned and the change stays in
    /// memory.
    pub fn set_total(
        &self,
        user_id: UserId,
        period: Period,
        input: &str,
    ) -> PocketResult<BudgetSet> {
        let amount = parse_positive_amount(input).map_err(PocketError::InvalidAmount)?;

        let before = self.storage.records.budgets(user_id)?;
        let mut budgets = before;
        budgets.set_total(period, amount);

        self.storage.records.set_budgets(user_id, budgets)?;
        self.storage.records.save()?;

        self.storage.log_update(
            EntityType::Budget,
            user_id.to_string(),
            Some(period.label().to_string()),
            &before,
            &budgets,
        )?;

        Ok(budgets)
    }
}

/// Parse user input as a strictly positive amount
///
/// The error string is the message shown to the user.
pub(crate) fn parse_positive_amount(input: &str) -> Result<Money, String> {
    match Money::parse(input) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        Ok(_) => Err(format!("'{}' must be greater than zero", input.trim())),
        Err(_) => Err(format!("'{}' is not a number", input.trim())),
    }
}
