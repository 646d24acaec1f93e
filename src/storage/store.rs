//! Shared dataset store: load-once, index, reset
//!
//! One [`DataStore`] is the session context for everything else in the
//! crate. It loads the JSON dataset document at most once per session,
//! builds a primary-key index per entity type in the same critical section,
//! and hands out cloned records. `Clone` on the store is shallow: every
//! service constructed from a clone observes the identical snapshot, which
//! is the core consistency invariant of the mock.
//!
//! `reset` discards the snapshot; the next read lazily reloads from the
//! current source. `swap_source` atomically replaces both the dataset and
//! its indexes with the content of a different document — a full
//! replacement, never a merge.

use crate::core::error::{MockError, MockResult};
use crate::core::record::{Record, RecordKey, key_of};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Declared primary-key field per entity type.
///
/// Entity types not listed here are still listable via full scans; they
/// just have no keyed lookup.
pub const ENTITY_KEYS: &[(&str, &str)] = &[
    ("purchaseOrders", "POHeaderId"),
    ("draftPurchaseOrders", "POHeaderId"),
    ("suppliers", "SupplierId"),
    ("purchaseRequisitions", "RequisitionHeaderId"),
    ("purchaseAgreements", "AgreementHeaderId"),
    ("purchaseOrderAcknowledgments", "POHeaderId"),
    ("salesOrders", "HeaderId"),
    ("customers", "CustomerId"),
    ("products", "InventoryItemId"),
];

/// One fully-loaded, fully-indexed view of the dataset.
///
/// Built as a unit so readers never observe records without their indexes.
#[derive(Debug)]
struct Snapshot {
    dataset: IndexMap<String, Vec<Record>>,
    indexes: HashMap<&'static str, HashMap<RecordKey, Record>>,
}

impl Snapshot {
    fn load(path: &Path) -> MockResult<Snapshot> {
        if !path.exists() {
            return Err(MockError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let dataset: IndexMap<String, Vec<Record>> = serde_json::from_str(&text)?;

        let mut indexes: HashMap<&'static str, HashMap<RecordKey, Record>> = HashMap::new();
        for &(entity_type, key_field) in ENTITY_KEYS {
            let mut index = HashMap::new();
            for record in dataset.get(entity_type).into_iter().flatten() {
                // Records missing the key field stay listable but unkeyed.
                if let Some(key) = key_of(record, key_field) {
                    index.insert(key, record.clone());
                }
            }
            indexes.insert(entity_type, index);
        }

        let record_count: usize = dataset.values().map(Vec::len).sum();
        tracing::info!(
            path = %path.display(),
            entity_types = dataset.len(),
            records = record_count,
            "loaded mock dataset"
        );

        Ok(Snapshot { dataset, indexes })
    }
}

#[derive(Debug)]
struct StoreState {
    path: PathBuf,
    snapshot: Option<Snapshot>,
}

/// Shared, resettable session context over the mock dataset.
///
/// Cloning is cheap and preserves sharing.
#[derive(Clone, Debug)]
pub struct DataStore {
    inner: Arc<RwLock<StoreState>>,
}

impl DataStore {
    /// Open a store over the given dataset document, loading it eagerly.
    ///
    /// Fails with [`MockError::SourceNotFound`] if the document does not
    /// exist — fixture data missing is a setup bug, not a transient
    /// condition.
    pub fn open(path: impl Into<PathBuf>) -> MockResult<DataStore> {
        let path = path.into();
        let snapshot = Snapshot::load(&path)?;
        Ok(DataStore {
            inner: Arc::new(RwLock::new(StoreState {
                path,
                snapshot: Some(snapshot),
            })),
        })
    }

    /// Look up a record by primary key. `None` is a signal value, never an
    /// error: turning a miss into [`MockError::EntityNotFound`] is the
    /// service layer's job.
    pub fn get(&self, entity_type: &str, key: impl Into<RecordKey>) -> MockResult<Option<Record>> {
        let key = key.into();
        self.with_snapshot(|snapshot| {
            snapshot
                .indexes
                .get(entity_type)
                .and_then(|index| index.get(&key))
                .cloned()
        })
    }

    /// All records of an entity type, in source-document order.
    pub fn list(&self, entity_type: &str) -> MockResult<Vec<Record>> {
        self.with_snapshot(|snapshot| {
            snapshot
                .dataset
                .get(entity_type)
                .cloned()
                .unwrap_or_default()
        })
    }

    /// Discard the snapshot. The next read reloads from the current source.
    /// Safe to call with no prior load.
    pub fn reset(&self) -> MockResult<()> {
        self.write()?.snapshot = None;
        Ok(())
    }

    /// Atomically replace the dataset with the content of a different
    /// document. The old snapshot and indexes are dropped together; no
    /// reader can observe a mix of the two sources.
    pub fn swap_source(&self, path: impl Into<PathBuf>) -> MockResult<()> {
        let path = path.into();
        let snapshot = Snapshot::load(&path)?;
        let mut state = self.write()?;
        state.path = path;
        state.snapshot = Some(snapshot);
        Ok(())
    }

    /// Location of the current dataset document.
    pub fn source_path(&self) -> MockResult<PathBuf> {
        Ok(self.read()?.path.clone())
    }

    fn with_snapshot<T>(&self, f: impl Fn(&Snapshot) -> T) -> MockResult<T> {
        {
            let state = self.read()?;
            if let Some(snapshot) = &state.snapshot {
                return Ok(f(snapshot));
            }
        }

        // Lazy reload after reset. Re-check under the write lock: another
        // reader may have reloaded while we waited.
        let mut state = self.write()?;
        if state.snapshot.is_none() {
            state.snapshot = Some(Snapshot::load(&state.path)?);
        }
        match &state.snapshot {
            Some(snapshot) => Ok(f(snapshot)),
            None => Err(MockError::Internal("snapshot missing after reload".to_string())),
        }
    }

    fn read(&self) -> MockResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|e| MockError::Internal(format!("failed to acquire read lock: {e}")))
    }

    fn write(&self) -> MockResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|e| MockError::Internal(format!("failed to acquire write lock: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(content: serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn small_db() -> NamedTempFile {
        fixture(json!({
            "suppliers": [
                {"SupplierId": 1001, "Supplier": "ABC Office Supplies Inc"},
                {"SupplierId": 1002, "Supplier": "TechParts Ltd"},
                {"Supplier": "No Id Vendor"}
            ],
            "purchaseOrders": []
        }))
    }

    #[test]
    fn test_open_missing_file_is_source_not_found() {
        let err = DataStore::open("/definitely/not/here/db.json").unwrap_err();
        assert!(matches!(err, MockError::SourceNotFound { .. }));
    }

    #[test]
    fn test_get_by_key_and_list_consistency() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();

        let abc = store.get("suppliers", 1001).unwrap().unwrap();
        assert_eq!(abc["Supplier"], json!("ABC Office Supplies Inc"));

        // Every keyed record is retrievable and appears exactly once in list().
        let all = store.list("suppliers").unwrap();
        assert_eq!(all.len(), 3);
        for record in &all {
            if let Some(key) = key_of(record, "SupplierId") {
                let indexed = store.get("suppliers", key).unwrap().unwrap();
                assert_eq!(&indexed, record);
            }
        }
    }

    #[test]
    fn test_record_without_key_is_listed_but_not_indexed() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();

        let all = store.list("suppliers").unwrap();
        assert!(all.iter().any(|r| r["Supplier"] == json!("No Id Vendor")));
        assert!(store.get("suppliers", "No Id Vendor").unwrap().is_none());
    }

    #[test]
    fn test_unknown_entity_type_lists_empty() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();
        assert!(store.list("inventoryOrganizations").unwrap().is_empty());
        assert!(store.get("inventoryOrganizations", 1).unwrap().is_none());
    }

    #[test]
    fn test_clones_share_one_snapshot() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();
        let other = store.clone();

        assert_eq!(
            store.list("suppliers").unwrap(),
            other.list("suppliers").unwrap()
        );

        // A reset through one handle is visible through the other.
        store.reset().unwrap();
        assert_eq!(other.list("suppliers").unwrap().len(), 3);
    }

    #[test]
    fn test_reset_then_read_reloads_lazily() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();
        store.reset().unwrap();
        store.reset().unwrap(); // safe with no loaded snapshot
        assert_eq!(store.list("suppliers").unwrap().len(), 3);
    }

    #[test]
    fn test_swap_source_fully_replaces_old_data() {
        let first = small_db();
        let second = fixture(json!({
            "suppliers": [{"SupplierId": 2001, "Supplier": "Replacement Corp"}]
        }));

        let store = DataStore::open(first.path()).unwrap();
        store.swap_source(second.path()).unwrap();

        let all = store.list("suppliers").unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["SupplierId"], json!(2001));
        // No residue from the first source, in data or in indexes.
        assert!(store.get("suppliers", 1001).unwrap().is_none());
        assert!(store.get("suppliers", 2001).unwrap().is_some());
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"suppliers\": 42}}").unwrap();
        let err = DataStore::open(file.path()).unwrap_err();
        assert!(matches!(err, MockError::Parse { .. }));
    }

    #[test]
    fn test_repeated_list_returns_equal_content() {
        let file = small_db();
        let store = DataStore::open(file.path()).unwrap();
        assert_eq!(
            store.list("suppliers").unwrap(),
            store.list("suppliers").unwrap()
        );
    }
}
