//! Budget CLI commands

use clap::Subcommand;

use super::auth::{open_session, AuthArgs};
use crate::config::Settings;
use crate::display::format_budget_set;
use crate::error::PocketResult;
use crate::models::Period;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budgets for every period
    Show,

    /// Set the budget total for a period
    Set {
        /// today, week or month
        period: Period,
        /// Amount (e.g., "5000" or "5000.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    auth: &AuthArgs,
    cmd: BudgetCommands,
) -> PocketResult<()> {
    let mut app = open_session(storage, settings, auth)?;
    let currency = app.state().currency().to_string();

    match cmd {
        BudgetCommands::Show => {
            let budgets = app.budgets()?;
            print!("{}", format_budget_set(&budgets, &currency));
            if budgets.is_zeroed() {
                println!("No budgets set yet. Run 'pocket budget set <period> <amount>'.");
            }
        }
        BudgetCommands::Set { period, amount } => {
            let budgets = app.edit_budget(period, &amount)?;
            println!(
                "{} budget set to {}",
                period.label(),
                budgets.line(period).total.format_with_currency(&currency)
            );
        }
    }

    Ok(())
}
