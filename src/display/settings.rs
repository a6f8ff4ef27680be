//! Settings display formatting

use crate::config::{DataPaths, Settings};

/// Format data paths and settings, as printed by `pocket config`
pub fn format_settings(settings: &Settings, paths: &DataPaths) -> String {
    let mut output = String::new();
    output.push_str("Pocket Budget Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Base directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Data directory: {}\n", paths.data_dir().display()));
    output.push_str(&format!("Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:      {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Theme:           {}\n", settings.theme));
    output.push_str(&format!("  Currency:        {}\n", settings.currency));
    output.push_str(&format!("  Date format:     {}\n", settings.date_format));
    output.push_str(&format!(
        "  Recent expenses: {}\n",
        settings.recent_expense_count
    ));
    output
}
