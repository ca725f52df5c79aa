//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PresetName, UserId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record written where none existed
    Create,
    /// Existing record overwritten
    Update,
    /// Current snapshot replaced by the default
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// Types of records that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Snapshot,
    Preset,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Snapshot => write!(f, "Snapshot"),
            EntityType::Preset => write!(f, "Preset"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Owner of the affected record
    pub user_id: String,

    /// Preset involved, either as the target (preset saves) or the source
    /// (preset applied to the current snapshot)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Human-readable diff summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        operation: Operation,
        entity_type: EntityType,
        user: &UserId,
        preset: Option<&PresetName>,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            user_id: user.to_string(),
            preset: preset.map(|p| p.to_string()),
            diff_summary,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} user={}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.user_id
        );

        if let Some(preset) = &self.preset {
            output.push_str(&format!(" preset={}", preset));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Reset.to_string(), "RESET");
    }

    #[test]
    fn test_entry_serialization_skips_empty_fields() {
        let user = UserId::new("alice").unwrap();
        let entry = AuditEntry::new(Operation::Reset, EntityType::Snapshot, &user, None, None);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"reset\""));
        assert!(json.contains("\"entity_type\":\"snapshot\""));
        assert!(!json.contains("preset"));
        assert!(!json.contains("diff_summary"));
    }

    #[test]
    fn test_human_readable() {
        let user = UserId::new("alice").unwrap();
        let preset = PresetName::new("Spring").unwrap();
        let entry = AuditEntry::new(
            Operation::Create,
            EntityType::Preset,
            &user,
            Some(&preset),
            Some("Income/Salary: 0 -> 45,000".into()),
        );

        let text = entry.format_human_readable();
        assert!(text.contains("CREATE Preset user=alice preset=Spring"));
        assert!(text.contains("Changes: Income/Salary: 0 -> 45,000"));
    }
}
