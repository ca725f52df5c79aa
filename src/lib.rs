//! Budget Analyzer - household budget analytics from the terminal
//!
//! This library provides the core functionality for the budget analyzer. A
//! user's budget is one snapshot of monthly income per source and expenses
//! per subcategory, from which the reports derive totals, a two-level
//! breakdown, savings suggestions and a three-sheet export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The category schema, money and the budget snapshot
//! - `storage`: Snapshot and preset persistence over a blob store
//! - `audit`: Audit logging system
//! - `reports`: Summary, breakdown, hierarchy and suggestions
//! - `export`: Export tables and their CSV/JSON/YAML writers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_analyzer::models::{BudgetSnapshot, UserId};
//! use budget_analyzer::reports::{suggest, BudgetSummary};
//! use budget_analyzer::storage::{BudgetStore, MemoryBlobStore};
//!
//! let store = BudgetStore::new(MemoryBlobStore::new(), true);
//! let snapshot = store.load(&UserId::new("alice")?)?;
//! let summary = BudgetSummary::from_snapshot(&snapshot);
//! let suggestions = suggest(&snapshot);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::BudgetError;
