use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_analyzer::audit::AuditLogger;
use budget_analyzer::cli::{
    handle_expense_command, handle_export_command, handle_income_command, handle_log_command,
    handle_preset_command, handle_report_command, handle_reset_command, handle_show_command,
    ExpenseCommands, ExportFormat, IncomeCommands, PresetCommands, ReportCommands,
};
use budget_analyzer::config::{paths::BudgetPaths, settings::Settings};
use budget_analyzer::models::UserId;
use budget_analyzer::storage::open_file_store;

/// Environment variable supplying the user when `--user` is absent
const USER_ENV: &str = "BUDGET_ANALYZER_USER";

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Household budget analyzer",
    long_about = "Track monthly income and categorized expenses, see where the money \
                  goes, and get rule-based suggestions for saving more."
)]
struct Cli {
    /// User whose budget to work with
    #[arg(short, long, global = true, env = USER_ENV)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the budget dashboard
    #[command(alias = "dashboard")]
    Show,

    /// Income management commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Reset the current budget to defaults (presets are kept)
    Reset,

    /// Reports on the current budget
    #[command(subcommand)]
    Report(ReportCommands),

    /// Saved budget presets
    #[command(subcommand)]
    Preset(PresetCommands),

    /// Export the current budget
    Export {
        /// Output directory (defaults to the exports directory)
        dir: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let user = UserId::new(cli.user.unwrap_or_else(|| settings.default_user.clone()))?;

    let store = open_file_store(&paths, &settings)?;

    match cli.command {
        Some(Commands::Show) => handle_show_command(&store, &settings, &user)?,
        Some(Commands::Income(cmd)) => handle_income_command(&store, &settings, &user, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&store, &settings, &user, cmd)?,
        Some(Commands::Reset) => handle_reset_command(&store, &settings, &user)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, &settings, &user, cmd)?,
        Some(Commands::Preset(cmd)) => handle_preset_command(&store, &settings, &user, cmd)?,
        Some(Commands::Export { dir, format }) => {
            let dir = dir.unwrap_or_else(|| paths.export_dir());
            handle_export_command(&store, &user, &dir, format)?;
        }
        Some(Commands::Config) => {
            println!("Budget Analyzer Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency:           {}", settings.currency_code);
            println!("  Seed defaults:      {}", settings.seed_defaults);
            println!("  Top expenses shown: {}", settings.top_expenses_count);
            println!("  Default user:       {}", settings.default_user);
            println!("  Active user:        {}", user);
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&AuditLogger::new(paths.audit_log()), count)?;
        }
        None => {
            println!("Budget Analyzer - household income and expense analysis");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget show' to see your dashboard.");
        }
    }

    Ok(())
}
