//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::error::BudgetResult;

/// Print the most recent audit entries, newest first
pub fn handle_log_command(logger: &AuditLogger, count: usize) -> BudgetResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        logger.entry_count()?,
        logger.path().display()
    );
    println!();
    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        handle_log_command(&logger, 10).unwrap();
    }
}
