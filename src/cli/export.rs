//! CLI command for data export
//!
//! Writes the export workbook for the current budget in one of three formats.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_workbook_csv, export_workbook_json, export_workbook_yaml, ExportWorkbook};
use crate::models::UserId;
use crate::storage::{BlobStore, BudgetStore};

/// Export format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// One CSV file per sheet (Summary, Income, Expenses)
    #[default]
    Csv,
    /// JSON document with all sheets
    Json,
    /// YAML document with all sheets, human-readable
    Yaml,
}

/// Export the user's current budget into `dir`, returning the written files
pub fn handle_export_command<S: BlobStore>(
    store: &BudgetStore<S>,
    user: &UserId,
    dir: &Path,
    format: ExportFormat,
) -> BudgetResult<Vec<PathBuf>> {
    let snapshot = store.load(user)?;
    let workbook = ExportWorkbook::from_snapshot(user.as_str(), &snapshot);

    let written = match format {
        ExportFormat::Csv => export_workbook_csv(&workbook, dir)?,
        ExportFormat::Json => {
            let path = document_path(dir, user, "json")?;
            let mut writer = BufWriter::new(create_file(&path)?);
            export_workbook_json(&workbook, &mut writer, true)?;
            writer.flush()?;
            vec![path]
        }
        ExportFormat::Yaml => {
            let path = document_path(dir, user, "yaml")?;
            let mut writer = BufWriter::new(create_file(&path)?);
            export_workbook_yaml(&workbook, &mut writer)?;
            writer.flush()?;
            vec![path]
        }
    };

    for path in &written {
        println!("Exported: {}", path.display());
    }
    Ok(written)
}

fn document_path(dir: &Path, user: &UserId, extension: &str) -> BudgetResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        BudgetError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;
    Ok(dir.join(format!("budget_{}.{}", user, extension)))
}

fn create_file(path: &Path) -> BudgetResult<File> {
    File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}
