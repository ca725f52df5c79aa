//! Export module for the budget analyzer
//!
//! [`tables`] projects a snapshot into the Summary, Income and Expenses
//! sheets. The writers render that workbook:
//! - CSV: one file per sheet (spreadsheet-compatible)
//! - JSON: the whole workbook, machine-readable
//! - YAML: the whole workbook, human-readable

pub mod csv;
pub mod json;
pub mod tables;
pub mod yaml;

pub use csv::{export_workbook_csv, sheet_path, write_sheet};
pub use json::{export_workbook_json, import_from_json};
pub use tables::{
    expense_rows, income_rows, summary_rows, ExpenseRow, ExportWorkbook, IncomeRow, SummaryRow,
    EXPENSES_SHEET, EXPORT_SCHEMA_VERSION, INCOME_SHEET, SUMMARY_SHEET, TOTAL_MARKER,
};
pub use yaml::{export_workbook_yaml, import_from_yaml};
