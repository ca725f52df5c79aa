//! Path management for the budget analyzer
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_ANALYZER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/budget-analyzer` on Linux, `%APPDATA%\budget-analyzer` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;
use crate::models::UserId;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_ANALYZER_DATA_DIR";

/// Manages all paths used by the budget analyzer
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default export directory (<base>/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Directory holding everything stored for one user
    pub fn user_dir(&self, user: &UserId) -> PathBuf {
        self.data_dir().join("users").join(user.as_str())
    }

    /// The user's current snapshot
    pub fn snapshot_file(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join("budget.json")
    }

    /// Directory of the user's named presets
    pub fn presets_dir(&self, user: &UserId) -> PathBuf {
        self.user_dir(user).join("presets")
    }

    /// Path of one named preset
    pub fn preset_file(&self, user: &UserId, name: &str) -> PathBuf {
        self.presets_dir(user).join(format!("{}.json", name))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "budget-analyzer")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine a config directory".into()))
}
