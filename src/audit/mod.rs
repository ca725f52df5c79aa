//! Audit logging for the budget analyzer
//!
//! Every write of persisted budget state (snapshot saves, resets, preset
//! saves and preset loads) is recorded in an append-only JSON Lines log.
//!
//! - `AuditEntry`: one operation with timestamp, owner and a change summary.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: summarizes the amounts that changed between snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_analyzer::audit::{AuditEntry, AuditLogger, EntityType, Operation, generate_diff};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::new(
//!     Operation::Update,
//!     EntityType::Snapshot,
//!     &user,
//!     None,
//!     generate_diff(&before, &after),
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
