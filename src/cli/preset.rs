//! Preset CLI commands
//!
//! Implements CLI commands for saving, loading and listing named copies of
//! the current budget.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_preset_list, format_snapshot};
use crate::error::BudgetResult;
use crate::models::{PresetName, UserId};
use crate::storage::{BlobStore, BudgetStore};

/// Preset subcommands
#[derive(Subcommand)]
pub enum PresetCommands {
    /// Save the current budget under a name
    Save {
        /// Preset name (defaults to "Budget_YYYYMMDD")
        name: Option<String>,
    },

    /// Replace the current budget with a saved preset
    Load {
        /// Preset name
        name: String,
    },

    /// List saved presets
    #[command(alias = "ls")]
    List,
}

/// Handle a preset command
pub fn handle_preset_command<S: BlobStore>(
    store: &BudgetStore<S>,
    settings: &Settings,
    user: &UserId,
    cmd: PresetCommands,
) -> BudgetResult<()> {
    match cmd {
        PresetCommands::Save { name } => {
            let name = match name {
                Some(name) => PresetName::new(name)?,
                None => PresetName::dated(Local::now().date_naive()),
            };

            let snapshot = store.load(user)?;
            store.save_preset(user, &name, &snapshot)?;
            println!("Saved current budget as preset '{}'", name);
        }

        PresetCommands::Load { name } => {
            let name = PresetName::new(name)?;
            let snapshot = store.apply_preset(user, &name)?;

            println!("Loaded preset '{}' into the current budget", name);
            println!();
            print!("{}", format_snapshot(&snapshot, &settings.currency_code));
        }

        PresetCommands::List => {
            println!("{}", format_preset_list(&store.list_presets(user)?));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetSnapshot, ExpenseSubcategory, Money};
    use crate::storage::MemoryBlobStore;

    #[test]
    fn test_save_without_name_uses_date() {
        let store = BudgetStore::new(MemoryBlobStore::new(), true);
        let user = UserId::new("alice").unwrap();

        handle_preset_command(
            &store,
            &Settings::default(),
            &user,
            PresetCommands::Save { name: None },
        )
        .unwrap();

        let presets = store.list_presets(&user).unwrap();
        assert_eq!(presets.len(), 1);
        assert!(presets[0].as_str().starts_with("Budget_"));
        assert_eq!(presets[0].as_str().len(), "Budget_YYYYMMDD".len());
    }

    #[test]
    fn test_load_replaces_current() {
        let store = BudgetStore::new(MemoryBlobStore::new(), true);
        let user = UserId::new("alice").unwrap();
        let settings = Settings::default();

        let mut lean = BudgetSnapshot::zeroed();
        lean.set_expense(ExpenseSubcategory::Groceries, Money::from_units(2500))
            .unwrap();
        store
            .save_preset(&user, &PresetName::new("Lean").unwrap(), &lean)
            .unwrap();

        handle_preset_command(
            &store,
            &settings,
            &user,
            PresetCommands::Load {
                name: "Lean".into(),
            },
        )
        .unwrap();
        assert_eq!(store.load(&user).unwrap(), lean);

        let err = handle_preset_command(
            &store,
            &settings,
            &user,
            PresetCommands::Load {
                name: "Missing".into(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_name_rejected() {
        let store = BudgetStore::new(MemoryBlobStore::new(), true);
        let user = UserId::new("alice").unwrap();

        let err = handle_preset_command(
            &store,
            &Settings::default(),
            &user,
            PresetCommands::Save {
                name: Some("../escape".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
