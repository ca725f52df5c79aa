//! User settings for the budget analyzer
//!
//! Manages display currency, default snapshot seeding, and dashboard
//! preferences.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// Seed new snapshots with typical household amounts instead of zeros
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Number of rows in the dashboard's top expenses list
    #[serde(default = "default_top_expenses_count")]
    pub top_expenses_count: usize,

    /// User id used when neither `--user` nor the environment supplies one
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "NOK".to_string()
}

fn default_seed_defaults() -> bool {
    true
}

fn default_top_expenses_count() -> usize {
    10
}

fn default_user() -> String {
    "default".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency(),
            seed_defaults: default_seed_defaults(),
            top_expenses_count: default_top_expenses_count(),
            default_user: default_user(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
