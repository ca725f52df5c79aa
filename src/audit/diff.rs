//! Diff generation for audit logging
//!
//! Summarizes which amounts changed between two snapshots.

use crate::models::BudgetSnapshot;

/// Changes listed individually before the summary collapses into a count
const MAX_LISTED_CHANGES: usize = 8;

/// Generate a human-readable diff between two snapshots
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &BudgetSnapshot, after: &BudgetSnapshot) -> Option<String> {
    let changes = after.changes_from(before);
    if changes.is_empty() {
        return None;
    }

    let mut parts: Vec<String> = changes
        .iter()
        .take(MAX_LISTED_CHANGES)
        .map(|(key, old, new)| format!("{}: {} -> {}", key, old, new))
        .collect();

    if changes.len() > MAX_LISTED_CHANGES {
        parts.push(format!("(+{} more)", changes.len() - MAX_LISTED_CHANGES));
    }

    Some(parts.join(", "))
}
