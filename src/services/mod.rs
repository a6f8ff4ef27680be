//! Service layer for Pocket Budget
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation, persistence and audit logging.

pub mod auth;
pub mod budget;
pub mod expense;

pub use auth::AuthService;
pub use budget::BudgetService;
pub use expense::ExpenseService;
