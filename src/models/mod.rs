//! Core data models for Pocket Budget
//!
//! This module contains all the data structures that represent the tracking
//! domain: users, budgets, expenses, goals and dashboard categories.

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod records;
pub mod user;

pub use budget::{BudgetLine, BudgetSet};
pub use category::{Category, CategoryBoard};
pub use expense::Expense;
pub use goal::SavingsGoal;
pub use ids::{ExpenseId, GoalId, IdClock, UserId};
pub use money::Money;
pub use period::Period;
pub use records::UserRecords;
pub use user::{SignupForm, User, UserSummary};
