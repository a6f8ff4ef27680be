//! Authentication service
//!
//! Sign-up and log-in against the user table. Sessions are not tracked
//! here; the caller decides what to do with the returned user.

use crate::audit::EntityType;
use crate::error::{PocketError, PocketResult};
use crate::models::{SignupForm, User, UserId};
use crate::storage::Storage;

/// Service for registering and authenticating users
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Fails with `Validation` if any field is blank and `DuplicatePhone` if
    /// the phone number is already registered. Does not log the user in.
    ///
    /// The change is made in memory before it is saved. If the save or the
    /// audit write fails, the error is returned and the change stays in
    /// memory.
    pub fn sign_up(&self, form: &SignupForm) -> PocketResult<User> {
        form.validate()
            .map_err(|e| PocketError::Validation(e.to_string()))?;

        if self.storage.users.phone_exists(&form.phone)? {
            return Err(PocketError::DuplicatePhone(form.phone.trim().to_string()));
        }

        let user = User::from_form(UserId::from_raw(self.storage.next_id()?), form);
        let user = self.storage.users.register(user)?;
        self.storage.users.save()?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.name.clone()),
            &user.summary(),
        )?;

        Ok(user)
    }

    /// Authenticate a user by phone and password
    ///
    /// On success the user's budget/expense records are created if this is
    /// their first login.
    pub fn log_in(&self, phone: &str, password: &str) -> PocketResult<User> {
        let user = self
            .storage
            .users
            .find_by_credentials(phone, password)?
            .ok_or(PocketError::InvalidCredentials)?;

        if self.storage.records.ensure(user.id)? {
            self.storage.records.save()?;
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm::new("Ana Cruz", "09171234567", "pass123")
    }

    #[test]
    fn test_sign_up() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);

        let user = service.sign_up(&form()).unwrap();
        assert_eq!(user.name, "Ana Cruz");
        assert_eq!(storage.users.count().unwrap(), 1);
        // Signing up does not create records
        assert!(storage.records.budgets(user.id).is_err());
    }

    #[test]
    fn test_sign_up_requires_all_fields() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);

        let err = service
            .sign_up(&SignupForm::new("Ana", "", "pass123"))
            .unwrap_err();
        assert!(matches!(err, PocketError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: All fields are required");
        assert_eq!(storage.users.count().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_phone() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);

        service.sign_up(&form()).unwrap();
        let err = service
            .sign_up(&SignupForm::new("Other", "09171234567", "x"))
            .unwrap_err();

        assert!(matches!(err, PocketError::DuplicatePhone(_)));
        assert_eq!(storage.users.count().unwrap(), 1);
    }

    #[test]
    fn test_log_in_creates_zeroed_records() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);
        let registered = service.sign_up(&form()).unwrap();

        let user = service.log_in("09171234567", "pass123").unwrap();
        assert_eq!(user.id, registered.id);
        assert!(storage.records.budgets(user.id).unwrap().is_zeroed());
    }

    #[test]
    fn test_log_in_wrong_password() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);
        let user = service.sign_up(&form()).unwrap();

        let err = service.log_in("09171234567", "nope").unwrap_err();
        assert!(matches!(err, PocketError::InvalidCredentials));
        assert!(storage.records.budgets(user.id).is_err());
    }

    #[test]
    fn test_user_ids_are_unique() {
        let storage = Storage::in_memory();
        let service = AuthService::new(&storage);

        let a = service.sign_up(&SignupForm::new("A", "1", "x")).unwrap();
        let b = service.sign_up(&SignupForm::new("B", "2", "x")).unwrap();
        assert_ne!(a.id, b.id);
    }
}
