//! Custom error types for Pocket Budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Pocket Budget operations
#[derive(Error, Debug)]
pub enum PocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Empty or malformed required field
    #[error("Validation error: {0}")]
    Validation(String),

    /// Phone number is already registered
    #[error("Phone number already registered: {0}")]
    DuplicatePhone(String),

    /// No user matches the given phone and password
    #[error("Phone number or password isn't correct")]
    InvalidCredentials,

    /// Budget amount is not a positive number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Expense category or amount is invalid
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Capability exists in the interface but has no implementation yet
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Operation requires a logged-in user
    #[error("Not logged in")]
    NotAuthenticated,

    /// Screen change not allowed in the current auth state
    #[error("Cannot go from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PocketError {
    /// Create a "not found" error for a user's budget/expense records
    pub fn records_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User records",
            identifier: identifier.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PocketError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Budget operations
pub type PocketResult<T> = Result<T, PocketError>;
