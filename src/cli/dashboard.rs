//! Dashboard CLI command

use super::auth::{open_session, AuthArgs};
use crate::config::Settings;
use crate::display::format_dashboard;
use crate::error::PocketResult;
use crate::models::Period;
use crate::storage::Storage;

/// Handle `pocket dashboard`
pub fn handle_dashboard(
    storage: &Storage,
    settings: &Settings,
    auth: &AuthArgs,
    period: Option<Period>,
) -> PocketResult<()> {
    let mut app = open_session(storage, settings, auth)?;
    if let Some(period) = period {
        app.select_period(period);
    }

    let dashboard = app.dashboard()?;
    print!(
        "{}",
        format_dashboard(&dashboard, app.state().currency(), &settings.date_format)
    );
    Ok(())
}
