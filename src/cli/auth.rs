//! Sign-up and log-in for CLI commands
//!
//! Commands that act on a user's data log in first. The phone number and
//! password come from flags or environment variables; a missing password is
//! prompted for without echo.

use clap::Args;

use crate::app::{App, Screen};
use crate::config::Settings;
use crate::error::{PocketError, PocketResult};
use crate::models::{SignupForm, User};
use crate::storage::Storage;

/// Credentials for commands that need a logged-in user
#[derive(Args, Clone, Default)]
pub struct AuthArgs {
    /// Phone number of the account
    #[arg(long, env = "POCKET_PHONE")]
    pub phone: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(long, env = "POCKET_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl AuthArgs {
    /// Log the app in with these credentials
    pub fn log_in(&self, app: &mut App<'_>) -> PocketResult<User> {
        let phone = self.phone.as_deref().ok_or_else(|| {
            PocketError::Validation("Phone number is required (--phone or POCKET_PHONE)".into())
        })?;
        let password = match &self.password {
            Some(password) => password.clone(),
            None => prompt_password()?,
        };

        app.navigate(Screen::Login)?;
        app.log_in(phone, &password)
    }
}

fn prompt_password() -> PocketResult<String> {
    Ok(rpassword::prompt_password("Password: ")?)
}

/// Start an app and log in
pub fn open_session<'a>(
    storage: &'a Storage,
    settings: &Settings,
    auth: &AuthArgs,
) -> PocketResult<App<'a>> {
    let mut app = App::new(storage, settings);
    auth.log_in(&mut app)?;
    Ok(app)
}

/// Handle `pocket signup`
pub fn handle_signup(
    storage: &Storage,
    settings: &Settings,
    name: &str,
    phone: &str,
    password: Option<String>,
) -> PocketResult<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let mut app = App::new(storage, settings);
    app.navigate(Screen::Signup)?;
    let user = app.sign_up(&SignupForm::new(name, phone, password))?;

    println!("Account created for {} ({}).", user.name, user.phone);
    println!("Run 'pocket dashboard --phone {}' to log in.", user.phone);
    Ok(())
}

