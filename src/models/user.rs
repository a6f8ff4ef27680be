//! User model
//!
//! Users register with a name, phone number and password. Passwords are
//! stored and compared as plain text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (creation timestamp)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Phone number, unique across users
    pub phone: String,

    /// Password in plain text
    pub password: String,
}

impl User {
    /// Build a user from a sign-up form
    pub fn from_form(id: UserId, form: &SignupForm) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            password: form.password.clone(),
        }
    }

    /// Check a phone/password pair against this user
    pub fn matches_credentials(&self, phone: &str, password: &str) -> bool {
        self.phone == phone.trim() && self.password == password
    }

    /// A view of the user without the password, safe to log or print
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// User fields without the password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub phone: String,
}

/// Sign-up input as entered by the user
#[derive(Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub phone: String,
    pub password: String,
}

impl SignupForm {
    /// Create a form from its three fields
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Validate that every field is filled in
    pub fn validate(&self) -> Result<(), UserValidationError> {
        let fields = [&self.name, &self.phone, &self.password];
        if fields.iter().any(|value| value.trim().is_empty()) {
            return Err(UserValidationError::MissingFields);
        }

        Ok(())
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validation errors for sign-up input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    MissingFields,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "All fields are required"),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validation() {
        assert!(SignupForm::new("Ana", "09171234567", "pass123").validate().is_ok());
        assert_eq!(
            SignupForm::new("", "09171234567", "pass123").validate(),
            Err(UserValidationError::MissingFields)
        );
        assert_eq!(
            SignupForm::new("Ana", "   ", "pass123").validate(),
            Err(UserValidationError::MissingFields)
        );
        assert_eq!(
            SignupForm::new("Ana", "0917", "").validate(),
            Err(UserValidationError::MissingFields)
        );
    }

    #[test]
    fn test_from_form_trims_name_and_phone() {
        let form = SignupForm::new(" Ana ", " 09171234567 ", " pass ");
        let user = User::from_form(UserId::from_raw(1), &form);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.phone, "09171234567");
        assert_eq!(user.password, " pass ");
    }

    #[test]
    fn test_matches_credentials() {
        let user = User::from_form(
            UserId::from_raw(1),
            &SignupForm::new("Ana", "09171234567", "pass123"),
        );
        assert!(user.matches_credentials("09171234567", "pass123"));
        assert!(user.matches_credentials(" 09171234567", "pass123"));
        assert!(!user.matches_credentials("09171234567", "Pass123"));
        assert!(!user.matches_credentials("0917", "pass123"));
    }

    #[test]
    fn test_debug_hides_password() {
        let user = User::from_form(
            UserId::from_raw(1),
            &SignupForm::new("Ana", "0917", "hunter2"),
        );
        let debug = format!("{:?}", user);
        assert!(!debug.contains("hunter2"));
        let summary = serde_json::to_string(&user.summary()).unwrap();
        assert!(!summary.contains("hunter2"));
    }
}
