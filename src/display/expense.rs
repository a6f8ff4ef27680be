//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        id: expense.id.to_string(),
        date: expense.date_label(date_format),
        category: truncate(&expense.category, 24),
        amount: expense.amount.format_with_currency(currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, currency: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!(
        "Amount:   {}\n",
        expense.amount.format_with_currency(currency)
    ));
    output.push_str(&format!("Date:     {}\n", expense.date_label(date_format)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};

    fn expense(raw: i64, category: &str, units: i64) -> Expense {
        Expense::new(ExpenseId::from_raw(raw), category, Money::from_units(units))
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "PHP", "%Y"), "No expenses yet.\n");
    }

    #[test]
    fn test_table_rows() {
        let expenses = vec![expense(2, "Bills", 1200), expense(1, "Food", 250)];
        let output = format_expense_table(&expenses, "PHP", "%Y-%m-%d");

        assert!(output.contains("Category"));
        assert!(output.contains("PHP 250.00"));
        assert!(output.contains("exp-2"));

        let bills = output.find("Bills").unwrap();
        let food = output.find("Food").unwrap();
        assert!(bills < food);
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&expense(7, "Food", 99), "USD", "%Y");
        assert!(output.contains("Expense:  exp-7"));
        assert!(output.contains("Amount:   USD 99.00"));
    }
}
