use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_budget::cli::{
    handle_audit, handle_budget_command, handle_config, handle_dashboard, handle_expense_command,
    handle_settings_command, handle_signup, AuthArgs, BudgetCommands, ExpenseCommands,
    SettingsCommands,
};
use pocket_budget::config::{DataPaths, Settings};
use pocket_budget::models::Period;
use pocket_budget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal budget and expense tracker",
    long_about = "Pocket Budget keeps a daily, weekly and monthly budget per user \
                  and a running list of expenses, all stored as local JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Register a new account
    Signup {
        /// Display name
        #[arg(long)]
        name: String,
        /// Phone number (used to log in)
        #[arg(long)]
        phone: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = "POCKET_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and show the dashboard
    Dashboard {
        #[command(flatten)]
        auth: AuthArgs,
        /// today, week or month
        #[arg(short, long)]
        period: Option<Period>,
    },

    /// Budget commands
    Budget {
        #[command(flatten)]
        auth: AuthArgs,
        #[command(subcommand)]
        command: BudgetCommands,
    },

    /// Expense commands
    Expense {
        #[command(flatten)]
        auth: AuthArgs,
        #[command(subcommand)]
        command: ExpenseCommands,
    },

    /// Theme and currency settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DataPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                storage.save_all()?;
                println!("Initialized Pocket Budget at: {}", paths.base_dir().display());
                println!();
                println!("Run 'pocket signup --name <NAME> --phone <PHONE>' to create an account.");
            }
        }
        Some(Commands::Config) => handle_config(&storage, &settings)?,
        Some(Commands::Signup {
            name,
            phone,
            password,
        }) => handle_signup(&storage, &settings, &name, &phone, password)?,
        Some(Commands::Dashboard { auth, period }) => {
            handle_dashboard(&storage, &settings, &auth, period)?
        }
        Some(Commands::Budget { auth, command }) => {
            handle_budget_command(&storage, &settings, &auth, command)?
        }
        Some(Commands::Expense { auth, command }) => {
            handle_expense_command(&storage, &settings, &auth, command)?
        }
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, &mut settings, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit(&storage, limit)?,
        None => {
            println!("Pocket Budget - personal budget and expense tracker");
            println!();
            println!("Run 'pocket --help' for usage information.");
        }
    }

    Ok(())
}
