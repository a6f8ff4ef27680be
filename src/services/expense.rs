//! Expense service
//!
//! Records and removes expenses for a user. Expenses are not linked to
//! budget `spent` amounts.

use crate::audit::EntityType;
use crate::error::{PocketError, PocketResult};
use crate::models::{Expense, ExpenseId, Money, UserId};
use crate::storage::Storage;

use super::budget::parse_positive_amount;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All of a user's expenses, newest first
    pub fn list(&self, user_id: UserId) -> PocketResult<Vec<Expense>> {
        self.storage.records.expenses(user_id)
    }

    /// The most recent `count` expenses, newest first
    pub fn recent(&self, user_id: UserId, count: usize) -> PocketResult<Vec<Expense>> {
        let mut expenses = self.storage.records.expenses(user_id)?;
        expenses.truncate(count);
        Ok(expenses)
    }

    /// Sum of all of a user's expenses
    pub fn total(&self, user_id: UserId) -> PocketResult<Money> {
        Ok(self
            .storage
            .records
            .expenses(user_id)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }

    /// Record a new expense from user input
    ///
    /// Fails with `InvalidExpense` if the category is blank or the amount is
    /// not a positive number. The new expense goes to the front of the list.
    ///
    /// The change is made in memory before it is saved. If the save or the
    /// audit write fails, the error is returned and the change stays in
    /// memory.
    pub fn add(&self, user_id: UserId, category: &str, amount: &str) -> PocketResult<Expense> {
        let category = category.trim();
        if category.is_empty() {
            return Err(PocketError::InvalidExpense(
                "Category cannot be empty".into(),
            ));
        }
        let amount = parse_positive_amount(amount).map_err(PocketError::InvalidExpense)?;

        let expense = Expense::new(
            ExpenseId::from_raw(self.storage.next_id()?),
            category,
            amount,
        );
        expense
            .validate()
            .map_err(|e| PocketError::InvalidExpense(e.to_string()))?;

        self.storage.records.add_expense(user_id, expense.clone())?;
        self.storage.records.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.category.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Delete an expense by id
    ///
    /// Returns whether an expense was removed; an unknown id is not an
    /// error.
    ///
    /// The change is made in memory before it is saved. If the save or the
    /// audit write fails, the error is returned and the change stays in
    /// memory.
    pub fn delete(&self, user_id: UserId, expense_id: ExpenseId) -> PocketResult<bool> {
        let Some(removed) = self.storage.records.delete_expense(user_id, expense_id)? else {
            return Ok(false);
        };
        self.storage.records.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.category.clone()),
            &removed,
        )?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataPaths;
    use tempfile::TempDir;

    const USER: UserId = UserId::from_raw(1);

    fn storage_with_user() -> Storage {
        let storage = Storage::in_memory();
        storage.records.ensure(USER).unwrap();
        storage
    }

    #[test]
    fn test_add_expense() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);

        let expense = service.add(USER, "Food", "250").unwrap();
        assert_eq!(expense.amount, Money::from_units(250));

        let list = service.list(USER).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], expense);
    }

    #[test]
    fn test_newest_expense_is_first() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);

        let first = service.add(USER, "Food", "250").unwrap();
        let second = service.add(USER, "Transportation", "40").unwrap();

        let list = service.list(USER).unwrap();
        assert_eq!(list[0].id, second.id);
        assert_eq!(list[1].id, first.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);

        let cases = [
            ("", "10"),
            ("  ", "10"),
            ("Food", ""),
            ("Food", "x"),
            ("Food", "0"),
            ("Food", "-3"),
        ];
        for (category, amount) in cases {
            let err = service.add(USER, category, amount).unwrap_err();
            assert!(matches!(err, PocketError::InvalidExpense(_)));
        }
        assert!(service.list(USER).unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);

        let expense = service.add(USER, "Food", "250").unwrap();
        assert!(service.delete(USER, expense.id).unwrap());
        assert!(service.list(USER).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);
        service.add(USER, "Food", "250").unwrap();

        assert!(!service.delete(USER, ExpenseId::from_raw(42)).unwrap());
        assert_eq!(service.list(USER).unwrap().len(), 1);
    }

    #[test]
    fn test_recent_and_total() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);
        for amount in ["1", "2", "3"] {
            service.add(USER, "Food", amount).unwrap();
        }

        let recent = service.recent(USER, 2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].amount, Money::from_units(3));
        assert_eq!(service.total(USER).unwrap(), Money::from_units(6));
    }

    #[test]
    fn test_adding_expenses_does_not_touch_budget_spent() {
        let storage = storage_with_user();
        let service = ExpenseService::new(&storage);
        service.add(USER, "Food", "250").unwrap();

        assert!(storage.records.budgets(USER).unwrap().is_zeroed());
    }

    #[test]
    fn test_failed_save_keeps_expense_in_memory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DataPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.records.ensure(USER).unwrap();

        // A file where the data directory should be makes every save fail
        let _ = std::fs::remove_dir_all(paths.data_dir());
        std::fs::write(paths.data_dir(), "").unwrap();

        let service = ExpenseService::new(&storage);
        let err = service.add(USER, "Food", "250").unwrap_err();
        assert!(matches!(err, PocketError::Storage(_)));
        assert_eq!(service.list(USER).unwrap().len(), 1);
    }
}
