//! JSON Export functionality
//!
//! Writes the whole workbook as one JSON document.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};

use super::tables::{ExportWorkbook, EXPORT_SCHEMA_VERSION};

/// Export the workbook to JSON
pub fn export_workbook_json<W: Write>(
    workbook: &ExportWorkbook,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, workbook)
    } else {
        serde_json::to_writer(writer, workbook)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

/// Read a workbook back from a JSON export
pub fn import_from_json(json_str: &str) -> BudgetResult<ExportWorkbook> {
    let workbook: ExportWorkbook =
        serde_json::from_str(json_str).map_err(|e| BudgetError::Export(e.to_string()))?;

    validate(&workbook)?;
    Ok(workbook)
}

/// Check that an export was written by a compatible version
pub fn validate(workbook: &ExportWorkbook) -> BudgetResult<()> {
    if workbook.schema_version != EXPORT_SCHEMA_VERSION {
        return Err(BudgetError::Export(format!(
            "Schema version mismatch: expected {}, got {}",
            EXPORT_SCHEMA_VERSION, workbook.schema_version
        )));
    }
    Ok(())
}
