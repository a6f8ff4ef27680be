//! Budget display formatting

use crate::models::{BudgetLine, BudgetSet, Period};

/// Format one period's line as total, spent and remaining
pub fn format_budget_line(period: Period, line: &BudgetLine, currency: &str) -> String {
    let mut output = format!(
        "{:<7} {:>16} {:>16} {:>16}",
        period.label(),
        line.total.format_with_currency(currency),
        line.spent.format_with_currency(currency),
        line.remaining().format_with_currency(currency),
    );

    if line.is_overspent() {
        output.push_str("  OVERSPENT");
    }

    output
}

/// Format all three periods as a table
pub fn format_budget_set(budgets: &BudgetSet, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<7} {:>16} {:>16} {:>16}\n",
        "Period", "Budget", "Spent", "Remaining"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for (period, line) in budgets.iter() {
        output.push_str(&format_budget_line(period, line, currency));
        output.push('\n');
    }

    output
}
