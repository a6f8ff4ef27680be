//! Dashboard display formatting

use crate::app::Dashboard;

/// Format the dashboard: greeting, budget card, categories, recent expenses
pub fn format_dashboard(dashboard: &Dashboard, currency: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Hello, {}\n", dashboard.user_name));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    let line = &dashboard.budget;
    output.push_str(&format!("{} budget\n", dashboard.period.label()));
    output.push_str(&format!(
        "  Budget:    {}\n",
        line.total.format_with_currency(currency)
    ));
    output.push_str(&format!(
        "  Spent:     {}\n",
        line.spent.format_with_currency(currency)
    ));
    output.push_str(&format!(
        "  Remaining: {}\n",
        dashboard.remaining().format_with_currency(currency)
    ));
    output.push('\n');

    output.push_str("Categories\n");
    if dashboard.categories.is_empty() {
        output.push_str("  (none)\n");
    }
    for category in &dashboard.categories {
        output.push_str(&format!(
            "  {:<16} {:>14} / {}\n",
            category.name,
            category.spent.format_with_currency(currency),
            category.budget.format_with_currency(currency),
        ));
    }
    output.push('\n');

    output.push_str("Recent Expenses\n");
    if dashboard.recent_expenses.is_empty() {
        output.push_str("  No expenses yet.\n");
    }
    for expense in &dashboard.recent_expenses {
        output.push_str(&format!(
            "  {:<16} {:>14}  {}\n",
            super::truncate(&expense.category, 16),
            expense.amount.format_with_currency(currency),
            expense.date_label(date_format),
        ));
    }

    output
}
