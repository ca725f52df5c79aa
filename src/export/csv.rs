//! CSV Export functionality
//!
//! Writes each workbook sheet to its own CSV file in a target directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{BudgetError, BudgetResult};

use super::tables::{ExportWorkbook, EXPENSES_SHEET, INCOME_SHEET, SUMMARY_SHEET};

/// Serialize rows to CSV, header taken from the row type
pub fn write_sheet<W: Write, T: Serialize>(writer: W, rows: &[T]) -> BudgetResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// The file a sheet is written to inside `dir`
pub fn sheet_path(dir: &Path, sheet: &str) -> PathBuf {
    dir.join(format!("{}.csv", sheet))
}

/// Write Summary.csv, Income.csv and Expenses.csv, returning their paths
pub fn export_workbook_csv(workbook: &ExportWorkbook, dir: &Path) -> BudgetResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| {
        BudgetError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let summary = sheet_path(dir, SUMMARY_SHEET);
    write_sheet(create_file(&summary)?, &workbook.summary)?;

    let income = sheet_path(dir, INCOME_SHEET);
    write_sheet(create_file(&income)?, &workbook.income)?;

    let expenses = sheet_path(dir, EXPENSES_SHEET);
    write_sheet(create_file(&expenses)?, &workbook.expenses)?;

    Ok(vec![summary, income, expenses])
}

fn create_file(path: &Path) -> BudgetResult<fs::File> {
    fs::File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tables::ExpenseRow;
    use crate::models::BudgetSnapshot;
    use tempfile::TempDir;

    #[test]
    fn test_export_workbook_csv() {
        let temp_dir = TempDir::new().unwrap();
        let workbook = ExportWorkbook::from_snapshot("alice", &BudgetSnapshot::seeded());

        let written = export_workbook_csv(&workbook, temp_dir.path()).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.exists()));

        let summary = fs::read_to_string(sheet_path(temp_dir.path(), "Summary")).unwrap();
        assert!(summary.starts_with("Metric,Amount\n"));
        assert!(summary.contains("Total Income,45000"));

        let expenses = fs::read_to_string(sheet_path(temp_dir.path(), "Expenses")).unwrap();
        let mut lines = expenses.lines();
        assert_eq!(
            lines.next(),
            Some("Category,Subcategory,Amount,% of Category,% of Income")
        );
        // Total rows leave the category share empty
        assert!(lines.next().unwrap().starts_with("Housing,TOTAL,14250,,"));
    }

    #[test]
    fn test_expenses_csv_reads_back() {
        let workbook = ExportWorkbook::from_snapshot("alice", &BudgetSnapshot::seeded());
        let mut output = Vec::new();
        write_sheet(&mut output, &workbook.expenses).unwrap();

        let mut reader = ::csv::Reader::from_reader(output.as_slice());
        let rows: Vec<ExpenseRow> = reader.deserialize().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), workbook.expenses.len());
        assert_eq!(rows[1].subcategory, "Rent/Mortgage");
        assert_eq!(rows[1].amount, 12000);
        assert_eq!(rows[0].percent_of_category, None);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("out");
        let workbook = ExportWorkbook::from_snapshot("bob", &BudgetSnapshot::zeroed());

        export_workbook_csv(&workbook, &target).unwrap();
        assert!(sheet_path(&target, "Income").exists());
    }
}
