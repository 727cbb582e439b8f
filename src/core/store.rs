//! Persisted form state.
//!
//! The store owns the one [`FormState`] of the application. It reads the
//! storage key once when opened and writes the whole state back after every
//! accepted update. Persistence is best-effort: storage failures are logged
//! and the in-memory state carries on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{FormResult, StorageError};
use super::form::{
    stakeholder_key, FieldKey, FormState, StakeholderAttribute, StakeholderRole, CHECKED,
    UNCHECKED,
};
use crate::catalog::{self, PhaseDefinition};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "marketingFlowData";

/// Key/value persistence backend.
pub trait StoragePort {
    /// Read the document stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the document stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`. The directory is created on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory (`<data_dir>/ucplan`).
    pub fn default_dir() -> anyhow::Result<PathBuf> {
        dirs::data_dir()
            .map(|d| d.join(crate::APP_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    /// Root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        // Atomic write: temp file + rename
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-memory storage for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-populated with one document.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.into(), value.into());
        storage
    }

    /// Make every write fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current document under `key`.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entry(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owner of the application's form state.
#[derive(Debug)]
pub struct StateStore<S: StoragePort> {
    storage: S,
    key: String,
    state: FormState,
    catalog: &'static [PhaseDefinition],
}

impl<S: StoragePort> StateStore<S> {
    /// Open the store, loading whatever is persisted under `key`.
    ///
    /// A missing document yields an empty state. An unreadable or malformed
    /// one is logged and also yields an empty state. Keys unknown to the
    /// catalog are dropped.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let catalog = catalog::phases();
        let state = load_state(&storage, &key).retain_known(catalog);
        tracing::debug!(key = %key, entries = state.len(), "Loaded form state");
        Self { storage, key, state, catalog }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Owned copy of the current form state.
    pub fn snapshot(&self) -> FormState {
        self.state.clone()
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.state.get(key)
    }

    /// Validate and apply one update, then persist.
    ///
    /// This is the only way the form state changes.
    pub fn update(&mut self, key: &str, value: &str) -> FormResult<()> {
        let field = FieldKey::resolve(key, self.catalog)?;
        field.validate_value(value)?;

        self.state.insert(field.to_string(), value);
        tracing::debug!(key = %field, "Updated form field");
        self.persist();
        Ok(())
    }

    /// Set an axis score (1-5).
    pub fn set_score(&mut self, axis_id: &str, score: i64) -> FormResult<()> {
        self.update(&FieldKey::Score(axis_id.to_string()).to_string(), &score.to_string())
    }

    /// Tick or untick a checklist question.
    pub fn set_checklist(&mut self, phase_id: u8, index: usize, checked: bool) -> FormResult<()> {
        let value = if checked { CHECKED } else { UNCHECKED };
        self.update(&catalog::checklist_key(phase_id, index), value)
    }

    /// Set one stakeholder attribute.
    pub fn set_stakeholder(
        &mut self,
        role: StakeholderRole,
        attribute: StakeholderAttribute,
        value: &str,
    ) -> FormResult<()> {
        self.update(&stakeholder_key(role, attribute), value)
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize form state");
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.key, &json) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist form state");
        }
    }
}

fn load_state<S: StoragePort>(storage: &S, key: &str) -> FormState {
    match read_state(storage, key) {
        Ok(state) => state,
        Err(e @ StorageError::Json(_)) => {
            tracing::warn!(key = %key, error = %e, "Stored form state is not valid, starting empty");
            FormState::default()
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Failed to read form state");
            FormState::default()
        }
    }
}

fn read_state<S: StoragePort>(storage: &S, key: &str) -> Result<FormState, StorageError> {
    match storage.read(key)? {
        Some(content) => Ok(serde_json::from_str(&content)?),
        None => Ok(FormState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FormError;
    use tempfile::tempdir;

    #[test]
    fn test_open_empty() {
        let store = StateStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        assert!(store.state().is_empty());
        assert_eq!(store.key(), "marketingFlowData");
    }

    #[test]
    fn test_update_persists_every_change() {
        let mut store = StateStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);

        store.update("useCaseName", "Churn Predictor").unwrap();
        let saved = store.storage().entry(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(saved, r#"{"useCaseName":"Churn Predictor"}"#);

        store.set_score("strategicAlignment", 5).unwrap();
        let saved = store.storage().entry(DEFAULT_STORAGE_KEY).unwrap();
        assert!(saved.contains(r#""score_strategicAlignment":"5""#));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = StateStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        store.update("useCaseName", "Churn").unwrap();

        let snapshot = store.snapshot();
        store.update("useCaseName", "Upsell").unwrap();

        assert_eq!(snapshot.get("useCaseName"), Some("Churn"));
        assert_eq!(store.get("useCaseName"), Some("Upsell"));
    }

    #[test]
    fn test_update_rejects_unknown_and_invalid() {
        let mut store = StateStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);

        assert!(matches!(store.update("nope", "x"), Err(FormError::UnknownKey(_))));
        assert!(matches!(
            store.set_score("riskLevel", 9),
            Err(FormError::InvalidScore { .. })
        ));
        assert!(matches!(
            store.set_checklist(1, 3, true),
            Err(FormError::UnknownQuestion { phase: 1, index: 3 })
        ));
        assert!(store.state().is_empty());
        assert!(store.storage().entry(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_checklist_and_stakeholder_helpers() {
        let mut store = StateStore::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY);

        store.set_checklist(2, 4, true).unwrap();
        store.set_stakeholder(StakeholderRole::Support, StakeholderAttribute::Team, "CRM").unwrap();

        assert!(store.state().is_checked(2, 4));
        assert_eq!(store.get("supportTeam"), Some("CRM"));

        store.set_checklist(2, 4, false).unwrap();
        assert_eq!(store.get("question2_4"), Some("false"));
        assert!(!store.state().is_checked(2, 4));
    }

    #[test]
    fn test_malformed_document_starts_empty() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let store = StateStore::open(storage, DEFAULT_STORAGE_KEY);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_malformed_document_is_a_json_error() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, r#"{"useCaseName": 7}"#);
        let err = read_state(&storage, DEFAULT_STORAGE_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
        assert!(err.to_string().starts_with("Invalid stored data:"));
    }

    #[test]
    fn test_extreme_persisted_score_renders_default() {
        let dir = tempdir().unwrap();
        FileStorage::new(dir.path())
            .write(DEFAULT_STORAGE_KEY, r#"{"score_riskLevel":"-9223372036854775808"}"#)
            .unwrap();

        let store = StateStore::open(FileStorage::new(dir.path()), DEFAULT_STORAGE_KEY);
        assert_eq!(store.get("score_riskLevel"), Some("-9223372036854775808"));
        assert_eq!(store.state().raw_score("riskLevel"), 3);

        let record = crate::markdown::PhaseExportRecord::new(
            catalog::phase(2).unwrap(),
            store.snapshot(),
        );
        let md = crate::markdown::generate_phase_markdown(&record);
        assert!(md.contains("| Risk Level | 3/5 (3 inverted) | Moderate |"));
    }

    #[test]
    fn test_unknown_stored_keys_are_dropped() {
        let storage = MemoryStorage::with_entry(
            DEFAULT_STORAGE_KEY,
            r#"{"useCaseName":"A","somethingElse":"B"}"#,
        );
        let store = StateStore::open(storage, DEFAULT_STORAGE_KEY);
        assert_eq!(store.get("useCaseName"), Some("A"));
        assert!(store.get("somethingElse").is_none());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let storage = MemoryStorage::new().failing_writes();
        let mut store = StateStore::open(storage, DEFAULT_STORAGE_KEY);

        store.update("useCaseName", "Still here").unwrap();
        assert_eq!(store.get("useCaseName"), Some("Still here"));
        assert!(store.storage().entry(DEFAULT_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_file_storage_save_and_load() {
        let dir = tempdir().unwrap();

        {
            let mut store = StateStore::open(FileStorage::new(dir.path()), DEFAULT_STORAGE_KEY);
            store.update("businessProblem", "Customers leave ✅ • ❌").unwrap();
            store.set_score("riskLevel", 4).unwrap();
        }

        assert!(dir.path().join("marketingFlowData.json").exists());
        assert!(!dir.path().join("marketingFlowData.json.tmp").exists());

        let store = StateStore::open(FileStorage::new(dir.path()), DEFAULT_STORAGE_KEY);
        assert_eq!(store.get("businessProblem"), Some("Customers leave ✅ • ❌"));
        assert_eq!(store.state().raw_score("riskLevel"), 4);
    }

    #[test]
    fn test_file_storage_missing_dir_reads_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("not-created"));
        assert!(storage.read(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_separate_keys_are_independent() {
        let dir = tempdir().unwrap();
        let mut a = StateStore::open(FileStorage::new(dir.path()), "planA");
        a.update("useCaseName", "A").unwrap();

        let b = StateStore::open(FileStorage::new(dir.path()), "planB");
        assert!(b.state().is_empty());
    }
}
