//! Custom error types for the budget analyzer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget analyzer operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input (user ids, preset names, amount text)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A persisted record could not be parsed or is missing required keys
    #[error("Corrupt budget data: {0}")]
    DataCorruption(String),

    /// A snapshot breaks the schema (negative amount, unknown key)
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    /// The persistence collaborator failed to read or write
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a "not found" error for presets
    pub fn preset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Preset",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for subcategories
    pub fn subcategory_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Subcategory",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_data_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption(_))
    }

    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget analyzer operations
pub type BudgetResult<T> = Result<T, BudgetError>;
