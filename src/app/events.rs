//! Change notifications for rendering layers
//!
//! A front-end subscribes once and re-renders whenever an event arrives.
//! Each successful mutation on `App` emits exactly one event.

use crate::config::Theme;
use crate::models::{ExpenseId, Period, UserId};

use super::screen::Screen;
use super::state::AppState;

/// What changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ThemeChanged(Theme),
    CurrencyChanged(String),
    /// A user registered; the app moved to the login screen
    SignedUp(UserId),
    /// A user logged in; the app moved to the dashboard
    LoggedIn(UserId),
    /// The user logged out; the app moved to the welcome screen
    LoggedOut,
    Navigated(Screen),
    BudgetChanged(Period),
    ExpenseAdded(ExpenseId),
    ExpenseDeleted(ExpenseId),
    CategoryDeleted(String),
    PeriodSelected(Period),
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppEvent, &AppState)>;

/// Registered listeners in subscription order
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    /// Register a listener
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&AppEvent, &AppState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver an event to every listener
    pub fn emit(&mut self, event: &AppEvent, state: &AppState) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event, state);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribe_emit_unsubscribe() {
        let mut listeners = Listeners::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = listeners.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        let state = AppState::default();
        listeners.emit(&AppEvent::LoggedOut, &state);
        assert_eq!(*seen.borrow(), vec![AppEvent::LoggedOut]);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&AppEvent::LoggedOut, &state);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_listeners_see_state() {
        let mut listeners = Listeners::default();
        let currency = Rc::new(RefCell::new(String::new()));

        let sink = Rc::clone(&currency);
        listeners.subscribe(move |_, state| *sink.borrow_mut() = state.currency().to_string());

        let mut state = AppState::default();
        state.set_currency("USD");
        listeners.emit(&AppEvent::CurrencyChanged("USD".into()), &state);
        assert_eq!(*currency.borrow(), "USD");
    }
}
