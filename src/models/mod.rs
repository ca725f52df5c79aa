//! Core data models for the budget analyzer
//!
//! This module contains the fixed category schema, the budget snapshot that
//! is stored per user, and the small value types around them.

pub mod ids;
pub mod money;
pub mod schema;
pub mod snapshot;

pub use ids::{PresetName, UserId};
pub use money::{Money, MoneyParseError};
pub use schema::{ExpenseCategory, ExpenseSubcategory, IncomeCategory};
pub use snapshot::{BudgetSnapshot, SnapshotRecord};
