//! Screens of the auth flow and main tabs

use std::fmt;

/// Tabs available once logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Expenses,
    Budget,
    Settings,
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Signup,
    Login,
    Main(Tab),
}

impl Screen {
    /// Whether the screen is only reachable while logged in
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Main(_))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Budget => "Budget",
            Self::Settings => "Settings",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => write!(f, "Welcome"),
            Self::Signup => write!(f, "Signup"),
            Self::Login => write!(f, "Login"),
            Self::Main(tab) => write!(f, "Main/{}", tab),
        }
    }
}
