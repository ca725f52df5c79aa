//! Storage layer for the budget analyzer
//!
//! Snapshots and presets are stored as JSON documents through a byte-oriented
//! [`BlobStore`]. The file-backed store uses atomic writes and creates its
//! directories on demand.

pub mod blob;
pub mod budget;
pub mod file_io;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore, RecordKey};
pub use budget::{decode, encode, BudgetStore};
pub use file_io::{read_bytes, write_atomic};

use crate::audit::AuditLogger;
use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetError;

/// The store the CLI runs against
pub type FileBudgetStore = BudgetStore<FileBlobStore>;

/// Open the file-backed store for the configured data directory, with auditing
pub fn open_file_store(paths: &BudgetPaths, settings: &Settings) -> Result<FileBudgetStore, BudgetError> {
    paths.ensure_directories()?;

    Ok(
        BudgetStore::new(FileBlobStore::new(paths.clone()), settings.seed_defaults)
            .with_audit(AuditLogger::new(paths.audit_log())),
    )
}
