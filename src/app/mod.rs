//! Application context for Pocket Budget
//!
//! `App` owns the shared state (theme, currency, logged-in user), the screen
//! state machine and the dashboard-local category board. Every mutation goes
//! through a method here so that subscribed listeners hear about it.

mod dashboard;
mod events;
mod screen;
mod state;

pub use dashboard::Dashboard;
pub use events::{AppEvent, Listeners, SubscriptionId};
pub use screen::{Screen, Tab};
pub use state::AppState;

use crate::config::{Settings, Theme};
use crate::error::{PocketError, PocketResult};
use crate::models::{
    BudgetSet, Category, CategoryBoard, Expense, ExpenseId, Money, Period, SavingsGoal, SignupForm,
    User,
};
use crate::services::{AuthService, BudgetService, ExpenseService};
use crate::storage::Storage;

/// The running application
pub struct App<'a> {
    storage: &'a Storage,
    state: AppState,
    screen: Screen,
    categories: CategoryBoard,
    selected_period: Period,
    recent_count: usize,
    listeners: Listeners,
}

impl<'a> App<'a> {
    /// Start at the welcome screen with nobody logged in
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            state: AppState::from_settings(settings),
            screen: Screen::Welcome,
            categories: CategoryBoard::default(),
            selected_period: Period::default(),
            recent_count: settings.recent_expense_count,
            listeners: Listeners::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user()
    }

    pub fn storage(&self) -> &'a Storage {
        self.storage
    }

    /// Register a change listener
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppEvent, &AppState) + 'static,
    ) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn emit(&mut self, event: AppEvent) {
        self.listeners.emit(&event, &self.state);
    }

    fn require_user(&self) -> PocketResult<&User> {
        self.state.current_user().ok_or(PocketError::NotAuthenticated)
    }

    fn transition_error(&self, to: Screen) -> PocketError {
        PocketError::InvalidTransition {
            from: self.screen.to_string(),
            to: to.to_string(),
        }
    }

    // Navigation

    /// Move to another screen
    ///
    /// Main tabs need a logged-in user; the auth screens need the opposite.
    pub fn navigate(&mut self, to: Screen) -> PocketResult<()> {
        if to.requires_auth() != self.state.is_authenticated() {
            return Err(self.transition_error(to));
        }

        self.screen = to;
        self.emit(AppEvent::Navigated(to));
        Ok(())
    }

    /// Register a new user and move to the login screen
    pub fn sign_up(&mut self, form: &SignupForm) -> PocketResult<User> {
        if self.state.is_authenticated() {
            return Err(self.transition_error(Screen::Signup));
        }

        let user = AuthService::new(self.storage).sign_up(form)?;
        self.screen = Screen::Login;
        self.emit(AppEvent::SignedUp(user.id));
        Ok(user)
    }

    /// Log in and open the dashboard
    ///
    /// On failure nobody is logged in and the screen does not change.
    pub fn log_in(&mut self, phone: &str, password: &str) -> PocketResult<User> {
        if self.state.is_authenticated() {
            return Err(self.transition_error(Screen::Login));
        }

        let user = AuthService::new(self.storage).log_in(phone, password)?;
        self.state.set_current_user(Some(user.clone()));
        self.screen = Screen::Main(Tab::Dashboard);
        self.categories = CategoryBoard::default();
        self.selected_period = Period::default();
        self.emit(AppEvent::LoggedIn(user.id));
        Ok(user)
    }

    /// Log out and return to the welcome screen
    pub fn log_out(&mut self) -> PocketResult<()> {
        self.require_user()?;

        self.state.set_current_user(None);
        self.screen = Screen::Welcome;
        self.emit(AppEvent::LoggedOut);
        Ok(())
    }

    // Settings

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
        self.emit(AppEvent::ThemeChanged(theme));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme().toggled();
        self.set_theme(theme);
        theme
    }

    /// Change the currency code shown next to amounts
    ///
    /// Input is trimmed and upper-cased; blank input is rejected.
    pub fn change_currency(&mut self, input: &str) -> PocketResult<String> {
        let currency = input.trim();
        if currency.is_empty() {
            return Err(PocketError::Validation("Currency symbol cannot be empty".into()));
        }

        let currency = currency.to_uppercase();
        self.state.set_currency(currency.clone());
        self.emit(AppEvent::CurrencyChanged(currency.clone()));
        Ok(currency)
    }

    // Budgets

    pub fn budgets(&self) -> PocketResult<BudgetSet> {
        let user = self.require_user()?;
        BudgetService::new(self.storage).budgets(user.id)
    }

    /// Set one period's budget total from user input
    pub fn edit_budget(&mut self, period: Period, input: &str) -> PocketResult<BudgetSet> {
        let user_id = self.require_user()?.id;
        let budgets = BudgetService::new(self.storage).set_total(user_id, period, input)?;
        self.emit(AppEvent::BudgetChanged(period));
        Ok(budgets)
    }

    // Expenses

    /// All expenses, newest first
    pub fn expenses(&self) -> PocketResult<Vec<Expense>> {
        let user = self.require_user()?;
        ExpenseService::new(self.storage).list(user.id)
    }

    /// Sum of all expenses
    pub fn expense_total(&self) -> PocketResult<Money> {
        let user = self.require_user()?;
        ExpenseService::new(self.storage).total(user.id)
    }

    pub fn add_expense(&mut self, category: &str, amount: &str) -> PocketResult<Expense> {
        let user_id = self.require_user()?.id;
        let expense = ExpenseService::new(self.storage).add(user_id, category, amount)?;
        self.emit(AppEvent::ExpenseAdded(expense.id));
        Ok(expense)
    }

    /// Delete an expense; returns false when no expense had that id
    pub fn delete_expense(&mut self, id: ExpenseId) -> PocketResult<bool> {
        let user_id = self.require_user()?.id;
        let removed = ExpenseService::new(self.storage).delete(user_id, id)?;
        if removed {
            self.emit(AppEvent::ExpenseDeleted(id));
        }
        Ok(removed)
    }

    pub fn goals(&self) -> PocketResult<Vec<SavingsGoal>> {
        let user = self.require_user()?;
        self.storage.records.goals(user.id)
    }

    // Dashboard

    pub fn categories(&self) -> &[Category] {
        self.categories.categories()
    }

    /// Remove a category from the dashboard board
    pub fn delete_category(&mut self, name: &str) -> PocketResult<bool> {
        self.require_user()?;
        let removed = self.categories.remove(name);
        if removed {
            self.emit(AppEvent::CategoryDeleted(name.to_string()));
        }
        Ok(removed)
    }

    pub fn add_category(&mut self, name: &str) -> PocketResult<Category> {
        self.require_user()?;
        Err(PocketError::NotImplemented(format!(
            "Adding category '{}'",
            name.trim()
        )))
    }

    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    pub fn select_period(&mut self, period: Period) {
        self.selected_period = period;
        self.emit(AppEvent::PeriodSelected(period));
    }

    /// Build the dashboard for the logged-in user
    pub fn dashboard(&self) -> PocketResult<Dashboard> {
        let user = self.require_user()?;
        let budgets = BudgetService::new(self.storage).budgets(user.id)?;
        let recent_expenses =
            ExpenseService::new(self.storage).recent(user.id, self.recent_count)?;

        Ok(Dashboard {
            user_name: user.name.clone(),
            period: self.selected_period,
            budget: *budgets.line(self.selected_period),
            categories: self.categories.categories().to_vec(),
            recent_expenses,
        })
    }
}
