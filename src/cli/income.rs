//! Income CLI commands
//!
//! Implements CLI commands for setting monthly income per category.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{IncomeCategory, Money, UserId};
use crate::reports::total_income;
use crate::storage::{BlobStore, BudgetStore};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly amount of an income category
    Set {
        /// Income category (e.g., "Salary", "Side Income")
        category: String,

        /// Amount in whole currency units (e.g., "45000" or "45 000")
        amount: String,
    },

    /// List every income category
    List,
}

/// Handle an income command
pub fn handle_income_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Set { category, amount } => {
            let category: IncomeCategory = category.parse()?;
            let amount = parse_amount(&amount)?;

            let mut snapshot = store.load(user)?;
            snapshot.set_income(category, amount)?;
            store.save(user, &snapshot)?;

            println!(
                "Set {} to {}",
                category,
                amount.format_with_code(&settings.currency_code)
            );
            println!(
                "Total income: {}",
                total_income(&snapshot).format_with_code(&settings.currency_code)
            );
        }

        IncomeCommands::List => {
            let snapshot = store.load(user)?;
            print!("{}", format_income(&snapshot, &settings.currency_code));
        }
    }

    Ok(())
}

/// Parse user-supplied amount text
pub(crate) fn parse_amount(text: &str) -> BudgetResult<Money> {
    Money::parse(text).map_err(|e| BudgetError::Validation(e.to_string()))
}
