use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_categories, handle_category, handle_list, handle_set_budget,
    handle_status, run_menu,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::display::format_load_status;
use expense_tracker::logging::init_tracing;
use expense_tracker::services::ExpenseTracker;
use expense_tracker::storage::{ExpenseStore, LoadStatus};

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker with a monthly budget",
    long_about = "Records expenses by category, shows totals and category \
                  breakdowns, and tracks spending against a monthly budget. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Store file to use instead of the default location
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense dated today
    Add {
        /// Amount (e.g., "200" or "45.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name or number (1-6)
        category: String,
        /// What the money was spent on
        #[arg(default_value = "")]
        description: String,
    },

    /// List all expenses with the grand total
    #[command(alias = "ls")]
    List,

    /// Show the expenses of one category
    Category {
        /// Category name or number (1-6)
        category: String,
    },

    /// List the available categories
    Categories,

    /// Show the budget status and category breakdown
    Status,

    /// Set the monthly budget limit
    SetBudget {
        /// New limit (must be positive)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Run the interactive menu
    Menu,

    /// Show current configuration and paths, optionally changing settings
    Config {
        /// Currency symbol used in reports
        #[arg(long)]
        currency: Option<String>,
        /// Budget percentage at which the status report warns
        #[arg(long)]
        warning_threshold: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    let mut paths = TrackerPaths::new();
    if let Some(file) = cli.file {
        paths = paths.with_store_file(file);
    }
    let mut settings = Settings::load_or_create(&paths).unwrap_or_else(|error| {
        tracing::warn!(%error, "using default settings");
        Settings::default()
    });

    let (mut tracker, status) = ExpenseTracker::open(ExpenseStore::new(paths.store_file()));
    if let LoadStatus::Recovered { .. } = status {
        eprintln!("{}", format_load_status(&status));
    }

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
        }) => handle_add(&mut tracker, &settings, &amount, &category, &description)?,
        Some(Commands::List) => handle_list(&tracker, &settings)?,
        Some(Commands::Category { category }) => handle_category(&tracker, &settings, &category)?,
        Some(Commands::Categories) => handle_categories()?,
        Some(Commands::Status) => handle_status(&tracker, &settings)?,
        Some(Commands::SetBudget { amount }) => {
            handle_set_budget(&mut tracker, &settings, &amount)?
        }
        Some(Commands::Config {
            currency,
            warning_threshold,
        }) => {
            if currency.is_some() || warning_threshold.is_some() {
                if let Some(symbol) = currency {
                    settings.currency_symbol = symbol;
                }
                if let Some(threshold) = warning_threshold {
                    settings.warning_threshold = threshold;
                }
                settings.save(&paths)?;
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Store file:     {}", paths.store_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Warning threshold: {}%", settings.warning_threshold);
        }
        Some(Commands::Menu) | None => {
            if !matches!(status, LoadStatus::Recovered { .. }) {
                println!("{}", format_load_status(&status));
            }
            let stdin = io::stdin();
            run_menu(&mut tracker, &settings, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}
