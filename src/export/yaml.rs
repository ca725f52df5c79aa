//! YAML Export functionality
//!
//! Writes the whole workbook as one human-readable YAML document.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

use super::json::validate;
use super::tables::ExportWorkbook;

/// Export the workbook to YAML, behind a short comment header
pub fn export_workbook_yaml<W: Write>(workbook: &ExportWorkbook, writer: &mut W) -> BudgetResult<()> {
    writeln!(writer, "# Budget Analyzer Export")
        .and_then(|_| writeln!(writer, "# User: {}", workbook.user))
        .and_then(|_| writeln!(writer, "# Generated: {}", workbook.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", workbook.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, workbook).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read a workbook back from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> BudgetResult<ExportWorkbook> {
    let workbook: ExportWorkbook =
        serde_yaml::from_str(yaml_str).map_err(|e| BudgetError::Export(e.to_string()))?;

    validate(&workbook)?;
    Ok(workbook)
}
