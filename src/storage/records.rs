//! Per-user records repository
//!
//! Holds each user's budgets, expenses and goals. Records for a user exist
//! once that user has logged in; every accessor other than `ensure` fails
//! with a not-found error for users without records.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::PocketError;
use crate::models::{BudgetSet, Expense, ExpenseId, SavingsGoal, UserId, UserRecords};

use super::file_io::{read_json, write_json_atomic};

/// One user's records as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordEntry {
    user_id: UserId,
    #[serde(flatten)]
    records: UserRecords,
}

/// Serializable records file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecordData {
    records: Vec<RecordEntry>,
}

/// Repository for budgets, expenses and goals keyed by user
pub struct RecordRepository {
    path: Option<PathBuf>,
    data: RwLock<HashMap<UserId, UserRecords>>,
}

impl RecordRepository {
    /// Create a repository backed by a JSON file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository that never touches disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, UserRecords>>, PocketError> {
        self.data
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<UserId, UserRecords>>, PocketError> {
        self.data
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Run `f` against a user's records, failing if they don't exist
    fn with_records<T>(
        &self,
        user_id: UserId,
        f: impl FnOnce(&mut UserRecords) -> T,
    ) -> Result<T, PocketError> {
        let mut data = self.write()?;
        let records = data
            .get_mut(&user_id)
            .ok_or_else(|| PocketError::records_not_found(user_id.to_string()))?;
        Ok(f(records))
    }

    /// Load records from disk (no-op when in memory)
    pub fn load(&self) -> Result<(), PocketError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file_data: RecordData = read_json(path)?;

        let mut data = self.write()?;
        data.clear();
        for entry in file_data.records {
            data.insert(entry.user_id, entry.records);
        }

        Ok(())
    }

    /// Save records to disk (no-op when in memory)
    pub fn save(&self) -> Result<(), PocketError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = self.read()?;

        let mut records: Vec<RecordEntry> = data
            .iter()
            .map(|(user_id, records)| RecordEntry {
                user_id: *user_id,
                records: records.clone(),
            })
            .collect();
        records.sort_by_key(|entry| entry.user_id);

        write_json_atomic(path, &RecordData { records })
    }

    /// Create zeroed records for a user if none exist
    ///
    /// Returns true if records were created. Existing records are never
    /// touched.
    pub fn ensure(&self, user_id: UserId) -> Result<bool, PocketError> {
        let mut data = self.write()?;
        if data.contains_key(&user_id) {
            return Ok(false);
        }
        data.insert(user_id, UserRecords::new());
        Ok(true)
    }

    /// Get a user's budgets
    pub fn budgets(&self, user_id: UserId) -> Result<BudgetSet, PocketError> {
        self.read()?
            .get(&user_id)
            .map(|r| r.budgets)
            .ok_or_else(|| PocketError::records_not_found(user_id.to_string()))
    }

    /// Replace a user's budgets
    pub fn set_budgets(&self, user_id: UserId, budgets: BudgetSet) -> Result<(), PocketError> {
        self.with_records(user_id, |records| records.budgets = budgets)
    }

    /// Get a user's expenses, newest first
    pub fn expenses(&self, user_id: UserId) -> Result<Vec<Expense>, PocketError> {
        self.read()?
            .get(&user_id)
            .map(|r| r.expenses.clone())
            .ok_or_else(|| PocketError::records_not_found(user_id.to_string()))
    }

    /// Put an expense at the front of a user's list
    pub fn add_expense(&self, user_id: UserId, expense: Expense) -> Result<(), PocketError> {
        self.with_records(user_id, |records| records.prepend_expense(expense))
    }

    /// Remove an expense by id
    ///
    /// Returns the removed expense, or `None` if the id wasn't present.
    pub fn delete_expense(
        &self,
        user_id: UserId,
        expense_id: ExpenseId,
    ) -> Result<Option<Expense>, PocketError> {
        self.with_records(user_id, |records| records.remove_expense(expense_id))
    }

    /// Get a user's savings goals
    pub fn goals(&self, user_id: UserId) -> Result<Vec<SavingsGoal>, PocketError> {
        self.read()?
            .get(&user_id)
            .map(|r| r.goals.clone())
            .ok_or_else(|| PocketError::records_not_found(user_id.to_string()))
    }

    /// Largest expense or goal id across all users
    pub fn max_id(&self) -> Result<Option<i64>, PocketError> {
        Ok(self.read()?.values().filter_map(UserRecords::max_id).max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Period};
    use tempfile::TempDir;

    const USER: UserId = UserId::from_raw(1);

    fn expense(id: i64, category: &str) -> Expense {
        Expense::new(ExpenseId::from_raw(id), category, Money::from_units(10))
    }

    #[test]
    fn test_ensure_creates_zeroed_records() {
        let repo = RecordRepository::in_memory();
        assert!(repo.budgets(USER).is_err());

        assert!(repo.ensure(USER).unwrap());
        assert!(repo.budgets(USER).unwrap().is_zeroed());
        assert!(repo.expenses(USER).unwrap().is_empty());
        assert!(repo.goals(USER).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let repo = RecordRepository::in_memory();
        repo.ensure(USER).unwrap();

        let mut budgets = repo.budgets(USER).unwrap();
        budgets.set_total(Period::Month, Money::from_units(5000));
        repo.set_budgets(USER, budgets).unwrap();

        assert!(!repo.ensure(USER).unwrap());
        assert_eq!(
            repo.budgets(USER).unwrap().line(Period::Month).total,
            Money::from_units(5000)
        );
    }

    #[test]
    fn test_missing_records_are_not_found() {
        let repo = RecordRepository::in_memory();
        assert!(matches!(
            repo.budgets(USER),
            Err(PocketError::NotFound { .. })
        ));
        assert!(matches!(
            repo.add_expense(USER, expense(1, "Food")),
            Err(PocketError::NotFound { .. })
        ));
    }

    #[test]
    fn test_expenses_are_prepended() {
        let repo = RecordRepository::in_memory();
        repo.ensure(USER).unwrap();
        repo.add_expense(USER, expense(1, "Food")).unwrap();
        repo.add_expense(USER, expense(2, "Bills")).unwrap();

        let expenses = repo.expenses(USER).unwrap();
        assert_eq!(expenses[0].category, "Bills");
        assert_eq!(expenses[1].category, "Food");
    }

    #[test]
    fn test_delete_missing_expense_is_noop() {
        let repo = RecordRepository::in_memory();
        repo.ensure(USER).unwrap();
        repo.add_expense(USER, expense(1, "Food")).unwrap();

        assert!(repo
            .delete_expense(USER, ExpenseId::from_raw(99))
            .unwrap()
            .is_none());
        assert_eq!(repo.expenses(USER).unwrap().len(), 1);

        assert!(repo
            .delete_expense(USER, ExpenseId::from_raw(1))
            .unwrap()
            .is_some());
        assert!(repo.expenses(USER).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");

        let repo = RecordRepository::new(path.clone());
        repo.ensure(USER).unwrap();
        repo.add_expense(USER, expense(7, "Food")).unwrap();
        let mut budgets = repo.budgets(USER).unwrap();
        budgets.set_total(Period::Week, Money::from_units(700));
        repo.set_budgets(USER, budgets).unwrap();
        repo.save().unwrap();

        let repo2 = RecordRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.expenses(USER).unwrap()[0].id, ExpenseId::from_raw(7));
        assert_eq!(
            repo2.budgets(USER).unwrap().line(Period::Week).total,
            Money::from_units(700)
        );
        assert_eq!(repo2.max_id().unwrap(), Some(7));
    }
}
