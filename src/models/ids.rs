//! Strongly-typed keys for persisted records
//!
//! Both keys end up as path components in the file store, so both are
//! validated at construction and cannot be built any other way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

const MAX_KEY_LEN: usize = 50;

/// Macro to generate validated string-key newtypes
macro_rules! define_key {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a key
            pub fn new(value: impl Into<String>) -> Result<Self, BudgetError> {
                let value = value.into();
                validate_key($label, &value)?;
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = BudgetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = BudgetError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }
    };
}

define_key!(UserId, "User id");
define_key!(PresetName, "Preset name");

impl PresetName {
    /// The default name offered when saving: `Budget_YYYYMMDD`
    pub fn dated(date: chrono::NaiveDate) -> Self {
        Self(format!("Budget_{}", date.format("%Y%m%d")))
    }
}

fn validate_key(label: &str, value: &str) -> Result<(), BudgetError> {
    if value.trim().is_empty() {
        return Err(BudgetError::Validation(format!("{} cannot be empty", label)));
    }

    if value.len() > MAX_KEY_LEN {
        return Err(BudgetError::Validation(format!(
            "{} too long ({} chars, max {})",
            label,
            value.len(),
            MAX_KEY_LEN
        )));
    }

    if value.starts_with('.') || value.contains(['/', '\\']) || value.chars().any(char::is_control) {
        return Err(BudgetError::Validation(format!(
            "{} contains invalid characters: {:?}",
            label, value
        )));
    }

    Ok(())
}
