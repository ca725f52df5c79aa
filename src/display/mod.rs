//! Display formatting for terminal output
//!
//! Provides utilities for formatting snapshots and reports for terminal
//! display, including tables, bars and currency amounts.

pub mod budget;
pub mod report;

pub use budget::{
    format_breakdown, format_dashboard, format_expenses, format_hierarchy, format_income,
    format_preset_list, format_snapshot, format_suggestions,
};
pub use report::{format_bar, format_money_colored, format_percentage};
