//! Budget snapshot store
//!
//! Loads and saves each user's current snapshot and named presets through a
//! [`BlobStore`]. Records are JSON documents with exactly two fields,
//! `income` and `expenses`.

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType, Operation};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetSnapshot, PresetName, SnapshotRecord, UserId};

use super::blob::{BlobStore, RecordKey};

/// Snapshot persistence for any number of users
///
/// Writes are last-writer-wins per record.
pub struct BudgetStore<S: BlobStore> {
    blobs: S,
    seed_defaults: bool,
    audit: Option<AuditLogger>,
}

impl<S: BlobStore> BudgetStore<S> {
    /// Create a store; `seed_defaults` picks the default snapshot flavor
    pub fn new(blobs: S, seed_defaults: bool) -> Self {
        Self {
            blobs,
            seed_defaults,
            audit: None,
        }
    }

    /// Record every write in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn blobs(&self) -> &S {
        &self.blobs
    }

    /// The snapshot used for users with no stored data and for resets
    pub fn default_snapshot(&self) -> BudgetSnapshot {
        if self.seed_defaults {
            BudgetSnapshot::seeded()
        } else {
            BudgetSnapshot::zeroed()
        }
    }

    /// Load the user's current snapshot, or the default if none is stored
    pub fn load(&self, user: &UserId) -> BudgetResult<BudgetSnapshot> {
        Ok(self
            .fetch(&RecordKey::Current(user.clone()))?
            .unwrap_or_else(|| self.default_snapshot()))
    }

    /// Replace the user's current snapshot
    pub fn save(&self, user: &UserId, snapshot: &BudgetSnapshot) -> BudgetResult<()> {
        self.write(
            RecordKey::Current(user.clone()),
            EntityType::Snapshot,
            WriteKind::Save(None),
            snapshot,
        )
    }

    /// Overwrite the current snapshot with the default; presets are kept
    pub fn reset(&self, user: &UserId) -> BudgetResult<BudgetSnapshot> {
        let snapshot = self.default_snapshot();
        self.write(
            RecordKey::Current(user.clone()),
            EntityType::Snapshot,
            WriteKind::Reset,
            &snapshot,
        )?;
        Ok(snapshot)
    }

    /// Load a named preset
    pub fn load_preset(&self, user: &UserId, name: &PresetName) -> BudgetResult<BudgetSnapshot> {
        self.fetch(&RecordKey::Preset(user.clone(), name.clone()))?
            .ok_or_else(|| BudgetError::preset_not_found(name.as_str()))
    }

    /// Save a named preset, overwriting any preset with the same name
    pub fn save_preset(
        &self,
        user: &UserId,
        name: &PresetName,
        snapshot: &BudgetSnapshot,
    ) -> BudgetResult<()> {
        self.write(
            RecordKey::Preset(user.clone(), name.clone()),
            EntityType::Preset,
            WriteKind::Save(Some(name)),
            snapshot,
        )
    }

    /// Names of the user's presets, sorted
    pub fn list_presets(&self, user: &UserId) -> BudgetResult<Vec<PresetName>> {
        self.blobs.list_presets(user)
    }

    /// Make a preset the user's current snapshot
    pub fn apply_preset(&self, user: &UserId, name: &PresetName) -> BudgetResult<BudgetSnapshot> {
        let snapshot = self.load_preset(user, name)?;
        self.write(
            RecordKey::Current(user.clone()),
            EntityType::Snapshot,
            WriteKind::Apply(name),
            &snapshot,
        )?;
        Ok(snapshot)
    }

    fn fetch(&self, key: &RecordKey) -> BudgetResult<Option<BudgetSnapshot>> {
        match self.blobs.get(key)? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Store a record, then audit it
    ///
    /// The record is written first. A failing audit append does not undo or
    /// fail the write; it is reported on stderr.
    fn write(
        &self,
        key: RecordKey,
        entity_type: EntityType,
        kind: WriteKind<'_>,
        snapshot: &BudgetSnapshot,
    ) -> BudgetResult<()> {
        let before = self.previous(&key)?;

        self.blobs.put(&key, &encode(snapshot)?)?;

        let logger = match &self.audit {
            Some(logger) => logger,
            None => return Ok(()),
        };

        let diff = match &before {
            Previous::Readable(prior) => generate_diff(prior, snapshot),
            _ => None,
        };
        let (operation, preset) = match kind {
            WriteKind::Reset => (Operation::Reset, None),
            WriteKind::Apply(name) => (Operation::Update, Some(name)),
            WriteKind::Save(preset) if before.existed() => (Operation::Update, preset),
            WriteKind::Save(preset) => (Operation::Create, preset),
        };

        let entry = AuditEntry::new(operation, entity_type, key.user(), preset, diff);
        if let Err(e) = logger.log(&entry) {
            eprintln!("Warning: change saved but not written to the audit log: {}", e);
        }
        Ok(())
    }

    /// The stored record before a write, read once and only when auditing.
    /// Unreadable records are about to be overwritten, so they only count as
    /// existing.
    fn previous(&self, key: &RecordKey) -> BudgetResult<Previous> {
        if self.audit.is_none() {
            return Ok(Previous::Absent);
        }
        Ok(match self.blobs.get(key)? {
            None => Previous::Absent,
            Some(bytes) => match decode(&bytes) {
                Ok(snapshot) => Previous::Readable(snapshot),
                Err(_) => Previous::Unreadable,
            },
        })
    }
}

/// What a write does, for its audit entry
enum WriteKind<'a> {
    Save(Option<&'a PresetName>),
    Reset,
    Apply(&'a PresetName),
}

/// State of a record just before it is overwritten
enum Previous {
    Absent,
    Unreadable,
    Readable(BudgetSnapshot),
}

impl Previous {
    fn existed(&self) -> bool {
        !matches!(self, Previous::Absent)
    }
}

/// Serialize a snapshot into its persisted record form
pub fn encode(snapshot: &BudgetSnapshot) -> BudgetResult<Vec<u8>> {
    serde_json::to_vec_pretty(&SnapshotRecord::from(snapshot))
        .map_err(|e| BudgetError::Persistence(format!("Failed to serialize snapshot: {}", e)))
}

/// Parse a persisted record
///
/// Unparseable bytes and missing keys are `DataCorruption`; unknown keys and
/// out-of-range amounts are `SchemaViolation`.
pub fn decode(bytes: &[u8]) -> BudgetResult<BudgetSnapshot> {
    let record: SnapshotRecord = serde_json::from_slice(bytes)
        .map_err(|e| BudgetError::DataCorruption(format!("Failed to parse snapshot: {}", e)))?;
    BudgetSnapshot::try_from(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseSubcategory, IncomeCategory, Money};
    use crate::storage::MemoryBlobStore;
    use tempfile::TempDir;

    fn store() -> BudgetStore<MemoryBlobStore> {
        BudgetStore::new(MemoryBlobStore::new(), true)
    }

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    fn edited() -> BudgetSnapshot {
        let mut snapshot = BudgetSnapshot::zeroed();
        snapshot
            .set_income(IncomeCategory::Salary, Money::from_units(20000))
            .unwrap();
        snapshot
            .set_expense(ExpenseSubcategory::RentMortgage, Money::from_units(8000))
            .unwrap();
        snapshot
    }

    #[test]
    fn test_missing_record_loads_default() {
        assert_eq!(store().load(&alice()).unwrap(), BudgetSnapshot::seeded());

        let zeroed = BudgetStore::new(MemoryBlobStore::new(), false);
        assert_eq!(zeroed.load(&alice()).unwrap(), BudgetSnapshot::zeroed());
    }

    #[test]
    fn test_save_then_load() {
        let store = store();
        store.save(&alice(), &edited()).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), edited());

        // Idempotent
        store.save(&alice(), &edited()).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), edited());
    }

    #[test]
    fn test_users_are_isolated() {
        let store = store();
        let bob = UserId::new("bob").unwrap();
        store.save(&alice(), &edited()).unwrap();

        assert_eq!(store.load(&bob).unwrap(), BudgetSnapshot::seeded());
    }

    #[test]
    fn test_corrupt_record_is_data_corruption() {
        let store = store();
        store
            .blobs()
            .put(&RecordKey::Current(alice()), b"{ not json")
            .unwrap();

        assert!(store.load(&alice()).unwrap_err().is_data_corruption());

        store
            .blobs()
            .put(&RecordKey::Current(alice()), br#"{"income": {}}"#)
            .unwrap();
        assert!(store.load(&alice()).unwrap_err().is_data_corruption());

        store
            .blobs()
            .put(
                &RecordKey::Current(alice()),
                br#"{"income": {"Salary": "lots"}, "expenses": {}}"#,
            )
            .unwrap();
        assert!(store.load(&alice()).unwrap_err().is_data_corruption());
    }

    #[test]
    fn test_extra_top_level_field_is_data_corruption() {
        let mut value = serde_json::to_value(SnapshotRecord::from(&BudgetSnapshot::zeroed())).unwrap();
        value["version"] = serde_json::json!(2);
        let bytes = serde_json::to_vec(&value).unwrap();

        assert!(decode(&bytes).unwrap_err().is_data_corruption());
    }

    #[test]
    fn test_schema_violation_surfaces_from_load() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.income.insert("Lottery".into(), 5);
        let store = store();
        store
            .blobs()
            .put(
                &RecordKey::Current(alice()),
                &serde_json::to_vec(&record).unwrap(),
            )
            .unwrap();

        assert!(store.load(&alice()).unwrap_err().is_schema_violation());
    }

    #[test]
    fn test_presets_are_separate_from_current() {
        let store = store();
        let name = PresetName::new("Tight month").unwrap();

        store.save_preset(&alice(), &name, &edited()).unwrap();

        assert_eq!(store.load(&alice()).unwrap(), BudgetSnapshot::seeded());
        assert_eq!(store.load_preset(&alice(), &name).unwrap(), edited());
        assert_eq!(store.list_presets(&alice()).unwrap(), vec![name]);
    }

    #[test]
    fn test_missing_preset_is_not_found() {
        let name = PresetName::new("Nope").unwrap();
        let err = store().load_preset(&alice(), &name).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_preset_overwrites_same_name() {
        let store = store();
        let name = PresetName::new("Plan").unwrap();

        store
            .save_preset(&alice(), &name, &BudgetSnapshot::zeroed())
            .unwrap();
        store.save_preset(&alice(), &name, &edited()).unwrap();

        assert_eq!(store.load_preset(&alice(), &name).unwrap(), edited());
        assert_eq!(store.list_presets(&alice()).unwrap().len(), 1);
    }

    #[test]
    fn test_apply_preset_replaces_current() {
        let store = store();
        let name = PresetName::new("Plan").unwrap();
        store.save_preset(&alice(), &name, &edited()).unwrap();

        let applied = store.apply_preset(&alice(), &name).unwrap();

        assert_eq!(applied, edited());
        assert_eq!(store.load(&alice()).unwrap(), edited());
    }

    #[test]
    fn test_reset_keeps_presets() {
        let store = store();
        let name = PresetName::new("Plan").unwrap();
        store.save(&alice(), &edited()).unwrap();
        store.save_preset(&alice(), &name, &edited()).unwrap();

        let reset = store.reset(&alice()).unwrap();

        assert_eq!(reset, BudgetSnapshot::seeded());
        assert_eq!(store.load(&alice()).unwrap(), BudgetSnapshot::seeded());
        assert_eq!(store.load_preset(&alice(), &name).unwrap(), edited());
    }

    #[test]
    fn test_reset_overwrites_corrupt_record() {
        let store = store();
        store
            .blobs()
            .put(&RecordKey::Current(alice()), b"garbage")
            .unwrap();

        store.reset(&alice()).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), BudgetSnapshot::seeded());
    }

    #[test]
    fn test_writes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = store().with_audit(logger.clone());
        let name = PresetName::new("Plan").unwrap();

        store.save(&alice(), &edited()).unwrap();
        store.save(&alice(), &BudgetSnapshot::zeroed()).unwrap();
        store.save_preset(&alice(), &name, &edited()).unwrap();
        store.apply_preset(&alice(), &name).unwrap();
        store.reset(&alice()).unwrap();

        let entries = logger.read_all().unwrap();
        let summary: Vec<_> = entries
            .iter()
            .map(|e| (e.operation, e.entity_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Operation::Create, EntityType::Snapshot),
                (Operation::Update, EntityType::Snapshot),
                (Operation::Create, EntityType::Preset),
                (Operation::Update, EntityType::Snapshot),
                (Operation::Reset, EntityType::Snapshot),
            ]
        );
        assert!(entries[0].diff_summary.is_none());
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("Income/Salary: 20,000 -> 0, Housing/Rent/Mortgage: 8,000 -> 0")
        );
        assert_eq!(entries[3].preset.as_deref(), Some("Plan"));
        assert!(entries.iter().all(|e| e.user_id == "alice"));
    }

    #[test]
    fn test_unwritable_audit_log_keeps_write() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let store = store().with_audit(logger);
        let name = PresetName::new("Plan").unwrap();

        store.save(&alice(), &edited()).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), edited());

        store.save_preset(&alice(), &name, &edited()).unwrap();
        store.reset(&alice()).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), BudgetSnapshot::seeded());

        store.apply_preset(&alice(), &name).unwrap();
        assert_eq!(store.load(&alice()).unwrap(), edited());
    }

    #[test]
    fn test_overwriting_corrupt_record_is_audited_as_update() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = store().with_audit(logger.clone());
        store
            .blobs()
            .put(&RecordKey::Current(alice()), b"garbage")
            .unwrap();

        store.save(&alice(), &edited()).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Update);
        assert!(entries[0].diff_summary.is_none());
    }

    #[test]
    fn test_oversized_record_is_schema_violation() {
        let mut record = SnapshotRecord::from(&BudgetSnapshot::zeroed());
        record.income.insert("Salary".into(), i64::MAX);
        record.income.insert("Side Income".into(), 1);

        let err = decode(&serde_json::to_vec(&record).unwrap()).unwrap_err();
        assert!(err.is_schema_violation());
    }
}
