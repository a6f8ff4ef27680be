//! Expense CLI commands

use clap::Subcommand;

use super::auth::{open_session, AuthArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::PocketResult;
use crate::models::ExpenseId;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "250" or "99.50")
        amount: String,
    },

    /// List expenses, newest first
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID (e.g., "exp-1700000000000")
        id: ExpenseId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    auth: &AuthArgs,
    cmd: ExpenseCommands,
) -> PocketResult<()> {
    let mut app = open_session(storage, settings, auth)?;
    let currency = app.state().currency().to_string();

    match cmd {
        ExpenseCommands::Add { category, amount } => {
            let expense = app.add_expense(&category, &amount)?;
            println!("Added expense:");
            print!(
                "{}",
                format_expense_details(&expense, &currency, &settings.date_format)
            );
        }
        ExpenseCommands::List { limit } => {
            let mut expenses = app.expenses()?;
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!(
                "{}",
                format_expense_table(&expenses, &currency, &settings.date_format)
            );
            if !expenses.is_empty() {
                let total = app.expense_total()?;
                println!("Total spent: {}", total.format_with_currency(&currency));
            }
        }
        ExpenseCommands::Delete { id } => {
            if app.delete_expense(id)? {
                println!("Deleted expense {}", id);
            } else {
                println!("No expense with ID {}", id);
            }
        }
    }

    Ok(())
}
