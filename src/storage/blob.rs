//! Byte-oriented record stores
//!
//! The budget store only needs opaque get/put of one blob per key. Keys are
//! scoped by user: one current snapshot per user, plus any number of named
//! presets under that user.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::sync::RwLock;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{PresetName, UserId};

use super::file_io::{read_bytes, write_atomic};

/// Address of one stored record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// The user's current snapshot
    Current(UserId),
    /// A named preset owned by the user
    Preset(UserId, PresetName),
}

impl RecordKey {
    pub fn user(&self) -> &UserId {
        match self {
            Self::Current(user) | Self::Preset(user, _) => user,
        }
    }
}

/// Persistence collaborator: opaque key -> bytes
///
/// Failures are reported as `BudgetError::Persistence`; retries, if any, are
/// the implementation's business.
pub trait BlobStore {
    /// Fetch a record, `None` if it was never written
    fn get(&self, key: &RecordKey) -> Result<Option<Vec<u8>>, BudgetError>;

    /// Replace a record wholesale
    fn put(&self, key: &RecordKey, bytes: &[u8]) -> Result<(), BudgetError>;

    /// Names of the user's presets, sorted
    fn list_presets(&self, user: &UserId) -> Result<Vec<PresetName>, BudgetError>;
}

/// JSON files under the data directory, one per record
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    paths: BudgetPaths,
}

impl FileBlobStore {
    pub fn new(paths: BudgetPaths) -> Self {
        Self { paths }
    }

    fn path_for(&self, key: &RecordKey) -> std::path::PathBuf {
        match key {
            RecordKey::Current(user) => self.paths.snapshot_file(user),
            RecordKey::Preset(user, name) => self.paths.preset_file(user, name.as_str()),
        }
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &RecordKey) -> Result<Option<Vec<u8>>, BudgetError> {
        read_bytes(self.path_for(key))
    }

    fn put(&self, key: &RecordKey, bytes: &[u8]) -> Result<(), BudgetError> {
        write_atomic(self.path_for(key), bytes)
    }

    fn list_presets(&self, user: &UserId) -> Result<Vec<PresetName>, BudgetError> {
        let dir = self.paths.presets_dir(user);

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(BudgetError::Persistence(format!(
                    "Failed to list presets in {}: {}",
                    dir.display(),
                    e
                )))
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| BudgetError::Persistence(format!("Failed to list presets: {}", e)))?;
            let file_name = entry.file_name();
            let Some(stem) = file_name.to_str().and_then(|n| n.strip_suffix(".json")) else {
                continue;
            };
            // Files that could not have been written through PresetName are ignored
            if let Ok(name) = PresetName::new(stem) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}

/// In-process store, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    records: RwLock<HashMap<RecordKey, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &RecordKey) -> Result<Option<Vec<u8>>, BudgetError> {
        let records = self.records.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(records.get(key).cloned())
    }

    fn put(&self, key: &RecordKey, bytes: &[u8]) -> Result<(), BudgetError> {
        let mut records = self.records.write().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;

        records.insert(key.clone(), bytes.to_vec());
        Ok(())
    }

    fn list_presets(&self, user: &UserId) -> Result<Vec<PresetName>, BudgetError> {
        let records = self.records.read().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut names: Vec<_> = records
            .keys()
            .filter_map(|key| match key {
                RecordKey::Preset(owner, name) if owner == user => Some(name.clone()),
                _ => None,
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(name: &str) -> UserId {
        UserId::new(name).unwrap()
    }

    fn preset(name: &str) -> PresetName {
        PresetName::new(name).unwrap()
    }

    fn exercise_store(store: &dyn BlobStore) {
        let alice = user("alice");
        let bob = user("bob");
        let current = RecordKey::Current(alice.clone());

        assert_eq!(store.get(&current).unwrap(), None);
        store.put(&current, b"one").unwrap();
        store.put(&current, b"two").unwrap();
        assert_eq!(store.get(&current).unwrap().unwrap(), b"two");

        store
            .put(&RecordKey::Preset(alice.clone(), preset("Summer")), b"s")
            .unwrap();
        store
            .put(&RecordKey::Preset(alice.clone(), preset("Autumn")), b"a")
            .unwrap();
        store
            .put(&RecordKey::Preset(bob.clone(), preset("Winter")), b"w")
            .unwrap();

        assert_eq!(
            store.list_presets(&alice).unwrap(),
            vec![preset("Autumn"), preset("Summer")]
        );
        assert_eq!(store.list_presets(&bob).unwrap(), vec![preset("Winter")]);
        assert!(store.list_presets(&user("carol")).unwrap().is_empty());

        // Presets are separate from the current record
        assert_eq!(store.get(&current).unwrap().unwrap(), b"two");
        assert_eq!(store.get(&RecordKey::Current(bob)).unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        exercise_store(&MemoryBlobStore::new());
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        exercise_store(&FileBlobStore::new(paths));
    }

    #[test]
    fn test_file_store_ignores_stray_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let alice = user("alice");
        let store = FileBlobStore::new(paths.clone());

        store
            .put(&RecordKey::Preset(alice.clone(), preset("Real")), b"{}")
            .unwrap();
        fs::write(paths.presets_dir(&alice).join("notes.txt"), "x").unwrap();
        fs::write(paths.presets_dir(&alice).join("half.json.tmp"), "x").unwrap();

        assert_eq!(store.list_presets(&alice).unwrap(), vec![preset("Real")]);
    }

    #[test]
    fn test_record_key_user() {
        let alice = user("alice");
        assert_eq!(RecordKey::Current(alice.clone()).user(), &alice);
        assert_eq!(RecordKey::Preset(alice.clone(), preset("p")).user(), &alice);
    }
}
