//! Shared application state
//!
//! Theme, currency and the logged-in user. Setters here do no validation;
//! input checks belong to the screen that collects the value.

use crate::config::{Settings, Theme};
use crate::models::User;

/// State visible to every screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    theme: Theme,
    currency: String,
    current_user: Option<User>,
}

impl AppState {
    /// Initial state taken from settings, with nobody logged in
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
            currency: settings.currency.clone(),
            current_user: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }

    pub fn set_current_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SignupForm, UserId};

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.currency(), "PHP");
        assert!(state.current_user().is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut state = AppState::default();
        state.set_currency("");
        assert_eq!(state.currency(), "");

        state.set_theme(Theme::Dark);
        assert_eq!(state.theme(), Theme::Dark);
    }

    #[test]
    fn test_current_user() {
        let mut state = AppState::default();
        let user = User::from_form(UserId::from_raw(1), &SignupForm::new("Ana", "0917", "pw"));

        state.set_current_user(Some(user.clone()));
        assert_eq!(state.current_user(), Some(&user));

        state.set_current_user(None);
        assert!(!state.is_authenticated());
    }
}
