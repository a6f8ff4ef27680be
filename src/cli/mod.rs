//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the app and service layers.

pub mod audit;
pub mod auth;
pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod settings;

pub use audit::handle_audit;
pub use auth::{handle_signup, open_session, AuthArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::handle_dashboard;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use settings::{handle_config, handle_settings_command, SettingsCommands};
