//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the store and the reports. Handlers are generic over
//! the blob store so they run the same against files or memory.

pub mod budget;
pub mod expense;
pub mod export;
pub mod income;
pub mod log;
pub mod preset;
pub mod report;

pub use budget::{handle_reset_command, handle_show_command};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use log::handle_log_command;
pub use preset::{handle_preset_command, PresetCommands};
pub use report::{handle_report_command, ReportCommands};
