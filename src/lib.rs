//! Pocket Budget - personal budget and expense tracker
//!
//! Users sign up with a name, phone number and password, then keep a budget
//! for today, this week and this month alongside a list of expenses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data paths and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (users, budgets, expenses, categories)
//! - `storage`: In-memory or JSON file storage
//! - `audit`: Audit logging of every change
//! - `services`: Business logic on top of storage
//! - `app`: Shared state, screen flow and change notifications
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `pocket` binary
//!
//! # Example
//!
//! ```rust
//! use pocket_budget::app::App;
//! use pocket_budget::config::Settings;
//! use pocket_budget::models::{Period, SignupForm};
//! use pocket_budget::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let mut app = App::new(&storage, &Settings::default());
//!
//! app.sign_up(&SignupForm::new("Ana", "09171234567", "pass123"))?;
//! app.log_in("09171234567", "pass123")?;
//! app.edit_budget(Period::Month, "5000")?;
//! app.add_expense("Food", "250")?;
//!
//! assert_eq!(app.expenses()?.len(), 1);
//! # Ok::<(), pocket_budget::PocketError>(())
//! ```

pub mod app;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PocketError, PocketResult};
