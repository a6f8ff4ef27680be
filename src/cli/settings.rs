//! Settings CLI commands
//!
//! Theme and currency changes go through the app so that the same input
//! rules apply as on the settings screen, then get written to `config.json`.

use clap::Subcommand;

use crate::app::App;
use crate::config::{Settings, Theme};
use crate::display::format_settings;
use crate::error::PocketResult;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the color theme
    Theme {
        /// "light", "dark" or "toggle"
        value: String,
    },

    /// Set the currency code shown before amounts
    Currency {
        /// Currency code, e.g. PHP or USD
        code: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> PocketResult<()> {
    let mut app = App::new(storage, settings);

    match cmd {
        SettingsCommands::Show => {
            println!("Theme:    {}", app.state().theme());
            println!("Currency: {}", app.state().currency());
            return Ok(());
        }
        SettingsCommands::Theme { value } => {
            let theme = if value.trim().eq_ignore_ascii_case("toggle") {
                app.toggle_theme()
            } else {
                let theme: Theme = value.parse()?;
                app.set_theme(theme);
                theme
            };
            println!("Theme set to {}", theme);
        }
        SettingsCommands::Currency { code } => {
            let currency = app.change_currency(&code)?;
            println!("Currency set to {}", currency);
        }
    }

    settings.theme = app.state().theme();
    settings.currency = app.state().currency().to_string();
    if let Some(paths) = storage.paths() {
        settings.save(paths)?;
    }

    Ok(())
}

/// Handle `pocket config`
pub fn handle_config(storage: &Storage, settings: &Settings) -> PocketResult<()> {
    match storage.paths() {
        Some(paths) => print!("{}", format_settings(settings, paths)),
        None => println!("Using in-memory storage; nothing is saved."),
    }
    Ok(())
}
