//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.
//! Amounts are shown as `"{currency} {amount:.2}"`.

pub mod budget;
pub mod dashboard;
pub mod expense;
pub mod settings;

pub use budget::{format_budget_line, format_budget_set};
pub use dashboard::format_dashboard;
pub use expense::{format_expense_details, format_expense_table};
pub use settings::format_settings;

/// Truncate a string for column display
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
