//! User repository
//!
//! Holds the user table. Backed by users.json when a path is given,
//! otherwise lives only in memory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::PocketError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserData {
    users: Vec<User>,
}

/// Repository for registered users
pub struct UserRepository {
    path: Option<PathBuf>,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
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

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, User>>, PocketError> {
        self.data
            .read()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<UserId, User>>, PocketError> {
        self.data
            .write()
            .map_err(|e| PocketError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load users from disk (no-op when in memory)
    pub fn load(&self) -> Result<(), PocketError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let file_data: UserData = read_json(path)?;

        let mut data = self.write()?;
        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk (no-op when in memory)
    pub fn save(&self) -> Result<(), PocketError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = self.read()?;

        let mut users: Vec<User> = data.values().cloned().collect();
        users.sort_by_key(|u| u.id);

        write_json_atomic(path, &UserData { users })
    }

    /// Get a user by phone number
    pub fn get_by_phone(&self, phone: &str) -> Result<Option<User>, PocketError> {
        let phone = phone.trim();
        Ok(self.read()?.values().find(|u| u.phone == phone).cloned())
    }

    /// Find the user whose phone and password both match
    pub fn find_by_credentials(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<Option<User>, PocketError> {
        Ok(self
            .read()?
            .values()
            .find(|u| u.matches_credentials(phone, password))
            .cloned())
    }

    /// Add a new user
    ///
    /// Fails with `DuplicatePhone` if the phone number is taken; the table
    /// is left unchanged in that case.
    pub fn register(&self, user: User) -> Result<User, PocketError> {
        let mut data = self.write()?;

        if data.values().any(|u| u.phone == user.phone) {
            return Err(PocketError::DuplicatePhone(user.phone));
        }
        if data.contains_key(&user.id) {
            return Err(PocketError::Storage(format!("User id {} already in use", user.id)));
        }

        data.insert(user.id, user.clone());
        Ok(user)
    }

    /// Check if a phone number is already registered
    pub fn phone_exists(&self, phone: &str) -> Result<bool, PocketError> {
        Ok(self.get_by_phone(phone)?.is_some())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, PocketError> {
        Ok(self.read()?.len())
    }

    /// Largest user id in the table
    pub fn max_id(&self) -> Result<Option<i64>, PocketError> {
        Ok(self.read()?.keys().map(|id| id.raw()).max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SignupForm;
    use tempfile::TempDir;

    fn user(id: i64, phone: &str) -> User {
        User::from_form(UserId::from_raw(id), &SignupForm::new("Ana", phone, "pass123"))
    }

    #[test]
    fn test_empty_repo() {
        let repo = UserRepository::in_memory();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.max_id().unwrap(), None);
    }

    #[test]
    fn test_register_and_lookup() {
        let repo = UserRepository::in_memory();
        repo.register(user(1, "09171234567")).unwrap();

        let found = repo.get_by_phone("09171234567").unwrap().unwrap();
        assert_eq!(found.id, UserId::from_raw(1));
        assert!(repo.phone_exists(" 09171234567 ").unwrap());
        assert!(!repo.phone_exists("0000").unwrap());
    }

    #[test]
    fn test_duplicate_phone_leaves_table_unchanged() {
        let repo = UserRepository::in_memory();
        repo.register(user(1, "09171234567")).unwrap();

        let err = repo.register(user(2, "09171234567")).unwrap_err();
        assert!(matches!(err, PocketError::DuplicatePhone(ref p) if p == "09171234567"));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_find_by_credentials() {
        let repo = UserRepository::in_memory();
        repo.register(user(1, "09171234567")).unwrap();

        let found = repo.find_by_credentials("09171234567", "pass123").unwrap();
        assert_eq!(found.map(|u| u.id), Some(UserId::from_raw(1)));
        assert!(repo
            .find_by_credentials("09171234567", "wrong")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");

        let repo = UserRepository::new(path.clone());
        repo.load().unwrap();
        repo.register(user(5, "0917")).unwrap();
        repo.register(user(9, "0918")).unwrap();
        repo.save().unwrap();

        let repo2 = UserRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 2);
        let found = repo2.get_by_phone("0917").unwrap().unwrap();
        assert_eq!(found.id, UserId::from_raw(5));
        assert_eq!(repo2.max_id().unwrap(), Some(9));
    }

    #[test]
    fn test_in_memory_save_writes_nothing() {
        let repo = UserRepository::in_memory();
        repo.register(user(1, "0917")).unwrap();
        repo.save().unwrap();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }
}
