//! Expense CLI commands
//!
//! Implements CLI commands for setting and listing monthly expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expenses;
use crate::error::BudgetResult;
use crate::models::{ExpenseCategory, ExpenseSubcategory, UserId};
use crate::storage::{BlobStore, BudgetStore};

use super::income::parse_amount;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Set the monthly amount of one subcategory
    Set {
        /// Expense category (e.g., "Housing")
        category: String,

        /// Subcategory within the category (e.g., "Rent/Mortgage")
        subcategory: String,

        /// Amount in whole currency units
        amount: String,
    },

    /// List every category and subcategory with its amount
    List,
}

/// Handle an expense command
pub fn handle_expense_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Set {
            category,
            subcategory,
            amount,
        } => {
            let category: ExpenseCategory = category.parse()?;
            let subcategory = ExpenseSubcategory::parse_in(category, &subcategory)?;
            let amount = parse_amount(&amount)?;

            let mut snapshot = store.load(user)?;
            snapshot.set_expense(subcategory, amount)?;
            store.save(user, &snapshot)?;

            println!(
                "Set {} / {} to {}",
                category,
                subcategory,
                amount.format_with_code(&settings.currency_code)
            );
            println!(
                "{} total: {}",
                category,
                snapshot
                    .category_total(category)
                    .format_with_code(&settings.currency_code)
            );
        }

        ExpenseCommands::List => {
            let snapshot = store.load(user)?;
            print!("{}", format_expenses(&snapshot, &settings.currency_code));
        }
    }

    Ok(())
}
