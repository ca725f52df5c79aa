//! Budget CLI commands
//!
//! The dashboard and the reset command.

use crate::config::settings::Settings;
use crate::display::{format_dashboard, format_snapshot};
use crate::error::BudgetResult;
use crate::models::UserId;
use crate::reports::{breakdown, BudgetSummary};
use crate::storage::{BlobStore, BudgetStore};

/// Print the dashboard for the user's current snapshot
pub fn handle_show_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
) -> BudgetResult<()> {
    let snapshot = store.load(user)?;
    let summary = BudgetSummary::from_snapshot(&snapshot);

    print!(
        "{}",
        format_dashboard(
            user.as_str(),
            &summary,
            &breakdown(&snapshot),
            settings.top_expenses_count,
            &settings.currency_code,
        )
    );
    Ok(())
}

/// Replace the current snapshot with the default one
pub fn handle_reset_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
) -> BudgetResult<()> {
    let snapshot = store.reset(user)?;

    println!("Budget for '{}' reset to defaults. Saved presets were kept.", user);
    println!();
    print!("{}", format_snapshot(&snapshot, &settings.currency_code));
    Ok(())
}
