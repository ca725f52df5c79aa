//! Report CLI commands
//!
//! Implements CLI commands for the breakdown, hierarchy and suggestions
//! reports.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_hierarchy, format_suggestions};
use crate::error::BudgetResult;
use crate::models::UserId;
use crate::reports::{breakdown, suggest, Hierarchy};
use crate::storage::{BlobStore, BudgetStore};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Category totals, each followed by its non-zero subcategories
    Breakdown,

    /// Category and subcategory nodes with their shares
    Hierarchy,

    /// Savings suggestions for the current budget
    #[command(alias = "advice")]
    Suggestions,
}

/// Handle a report command
pub fn handle_report_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let snapshot = store.load(user)?;
    let code = &settings.currency_code;

    match cmd {
        ReportCommands::Breakdown => {
            println!("Expense Breakdown");
            println!("{}", format_breakdown(&breakdown(&snapshot), code));
        }

        ReportCommands::Hierarchy => {
            let hierarchy = Hierarchy::build(&snapshot);
            hierarchy.verify()?;

            println!("Expense Hierarchy");
            print!("{}", format_hierarchy(&hierarchy, code));
        }

        ReportCommands::Suggestions => {
            print!("{}", format_suggestions(&suggest(&snapshot), code));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    #[test]
    fn test_reports_run_on_default_snapshot() {
        let store = BudgetStore::new(MemoryBlobStore::new(), true);
        let user = UserId::new("alice").unwrap();
        let settings = Settings::default();

        for cmd in [
            ReportCommands::Breakdown,
            ReportCommands::Hierarchy,
            ReportCommands::Suggestions,
        ] {
            handle_report_command(&store, &settings, &user, cmd).unwrap();
        }
    }
}
