//! ReferenceStore: the CRUD contract over a durable key-value store.
//!
//! The store owns the in-memory collection and mirrors it to the backend
//! under a fixed key. Every mutation re-serializes the whole collection.

use refbook_core::{
    decode_collection, decode_collection_checked, encode_collection, export_text, render_list,
    validate, CoreError, ListView, Reference, ReferenceCollection, ReferenceDraft, ValidationError,
};
use refbook_store::KvStore;

use crate::error::Result;

/// Key the collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "mr-refs";

/// Configuration for a [`ReferenceStore`].
#[derive(Debug, Clone)]
pub struct RefbookConfig {
    /// Key the collection is stored under.
    pub storage_key: String,
    /// Treat a stored collection with a blank-named record as corrupt.
    pub validate_on_load: bool,
}

impl Default for RefbookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            validate_on_load: true,
        }
    }
}

/// The reference record manager.
///
/// Mutations are all-or-nothing: the next collection is built and persisted
/// first, and only replaces the in-memory one once the write succeeded.
pub struct ReferenceStore<S: KvStore> {
    /// The durable backend.
    backend: S,
    /// Configuration.
    config: RefbookConfig,
    /// The current collection, in display order.
    collection: ReferenceCollection,
}

impl<S: KvStore> ReferenceStore<S> {
    /// Open a store and load the persisted collection.
    pub fn open(backend: S, config: RefbookConfig) -> Self {
        let mut store = Self {
            backend,
            config,
            collection: ReferenceCollection::new(),
        };
        store.collection = store.load();
        store
    }

    /// Get the backend reference.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Get the configuration.
    pub fn config(&self) -> &RefbookConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Read the persisted collection.
    ///
    /// Never fails: a missing key, an unreadable backend, or a malformed value
    /// all yield an empty collection. Corrupt data is left in place.
    pub fn load(&self) -> ReferenceCollection {
        let key = &self.config.storage_key;

        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ReferenceCollection::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read references; starting empty");
                return ReferenceCollection::new();
            }
        };

        match self.decode(&raw) {
            Ok(collection) => {
                tracing::debug!(key = %key, count = collection.len(), "loaded references");
                collection
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "stored references are corrupt; starting empty");
                ReferenceCollection::new()
            }
        }
    }

    /// Re-read the persisted collection, replacing the in-memory one.
    pub fn reload(&mut self) -> &ReferenceCollection {
        self.collection = self.load();
        &self.collection
    }

    /// Serialize `collection` and write it under the storage key.
    pub fn save(&self, collection: &ReferenceCollection) -> Result<()> {
        let encoded = encode_collection(collection)?;
        self.backend.set(&self.config.storage_key, &encoded)?;
        tracing::debug!(key = %self.config.storage_key, count = collection.len(), "saved references");
        Ok(())
    }

    fn decode(&self, raw: &str) -> std::result::Result<ReferenceCollection, CoreError> {
        if self.config.validate_on_load {
            decode_collection_checked(raw)
        } else {
            decode_collection(raw)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // CRUD
    // ─────────────────────────────────────────────────────────────────────────

    /// Trim a draft and check the required name.
    pub fn validate(&self, draft: &ReferenceDraft) -> std::result::Result<Reference, ValidationError> {
        validate(draft)
    }

    /// Append a validated record and persist. Returns the new index.
    pub fn add(&mut self, draft: &ReferenceDraft) -> Result<usize> {
        let reference = validate(draft)?;

        let mut next = self.collection.clone();
        let index = next.push(reference);
        self.commit(next)?;

        Ok(index)
    }

    /// Replace the record at `index` and persist.
    ///
    /// The index is checked before the draft, so a stale index reports
    /// `OutOfRange` even for an invalid draft.
    pub fn update(&mut self, index: usize, draft: &ReferenceDraft) -> Result<()> {
        self.collection.check_index(index)?;
        let reference = validate(draft)?;

        let mut next = self.collection.clone();
        next.replace(index, reference)?;
        self.commit(next)
    }

    /// Delete the record at `index`, shifting later records down, and persist.
    pub fn remove(&mut self, index: usize) -> Result<Reference> {
        let mut next = self.collection.clone();
        let removed = next.remove(index)?;
        self.commit(next)?;

        Ok(removed)
    }

    fn commit(&mut self, next: ReferenceCollection) -> Result<()> {
        self.save(&next)?;
        self.collection = next;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The current collection.
    pub fn records(&self) -> &ReferenceCollection {
        &self.collection
    }

    /// The record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Reference> {
        self.collection.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Render the current collection for display.
    pub fn render(&self) -> ListView {
        render_list(&self.collection)
    }

    /// Plain-text export of the current collection.
    pub fn export_text(&self) -> String {
        export_text(&self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RefbookError;
    use refbook_core::OutOfRange;
    use refbook_store::{MemoryStore, StoreError};
    use std::sync::Arc;

    fn jane() -> ReferenceDraft {
        ReferenceDraft::new("Jane Doe")
            .role("Manager")
            .company("Acme")
            .email("jane@acme.com")
    }

    fn open(backend: Arc<MemoryStore>) -> ReferenceStore<Arc<MemoryStore>> {
        ReferenceStore::open(backend, RefbookConfig::default())
    }

    #[test]
    fn test_add_persists() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = open(backend.clone());

        assert_eq!(store.add(&jane()).unwrap(), 0);
        assert_eq!(store.add(&ReferenceDraft::new("  John ")).unwrap(), 1);

        let reopened = open(backend);
        assert_eq!(reopened.records(), store.records());
        assert_eq!(reopened.get(1).unwrap().name, "John");
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = open(backend.clone());

        let err = store.add(&ReferenceDraft::new("   ").role("CTO")).unwrap_err();
        assert!(matches!(
            err,
            RefbookError::Validation(ValidationError::MissingRequiredField("name"))
        ));
        assert!(err.is_user_facing());
        assert!(store.is_empty());
        assert!(backend.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_update_out_of_range() {
        let mut store = open(Arc::new(MemoryStore::new()));
        store.add(&jane()).unwrap();
        store.add(&ReferenceDraft::new("John")).unwrap();
        let before = store.records().clone();

        let err = store.update(5, &ReferenceDraft::new("Nobody")).unwrap_err();
        assert!(matches!(
            err,
            RefbookError::OutOfRange(OutOfRange { index: 5, len: 2 })
        ));
        assert!(!err.is_user_facing());
        assert_eq!(store.records(), &before);
    }

    #[test]
    fn test_update_checks_index_first() {
        let mut store = open(Arc::new(MemoryStore::new()));
        let err = store.update(0, &ReferenceDraft::new("")).unwrap_err();
        assert!(matches!(err, RefbookError::OutOfRange(_)));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = open(Arc::new(MemoryStore::new()));
        store.add(&jane()).unwrap();

        assert!(matches!(
            store.remove(1),
            Err(RefbookError::OutOfRange(OutOfRange { index: 1, len: 1 }))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let backend = Arc::new(MemoryStore::with_quota(120));
        let mut store = open(backend.clone());
        store.add(&ReferenceDraft::new("A")).unwrap();
        let persisted = backend.get(DEFAULT_STORAGE_KEY).unwrap();

        let long = "x".repeat(200);
        let err = store.add(&ReferenceDraft::new(long)).unwrap_err();
        assert!(matches!(
            err,
            RefbookError::Store(StoreError::QuotaExceeded { .. })
        ));

        assert_eq!(store.len(), 1);
        assert_eq!(backend.get(DEFAULT_STORAGE_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_corrupt_value_loads_empty_and_is_kept() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(DEFAULT_STORAGE_KEY, "not-json").unwrap();

        let store = open(backend.clone());
        assert!(store.is_empty());
        assert_eq!(
            backend.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some("not-json")
        );
    }

    #[test]
    fn test_validate_on_load() {
        let raw = r#"[{"name":"ok"},{"name":""}]"#;

        let backend = Arc::new(MemoryStore::new());
        backend.set(DEFAULT_STORAGE_KEY, raw).unwrap();
        assert!(open(backend.clone()).is_empty());

        let lenient = ReferenceStore::open(
            backend,
            RefbookConfig {
                validate_on_load: false,
                ..RefbookConfig::default()
            },
        );
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn test_custom_storage_key() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = ReferenceStore::open(
            backend.clone(),
            RefbookConfig {
                storage_key: "references".into(),
                ..RefbookConfig::default()
            },
        );
        store.add(&jane()).unwrap();

        assert!(backend.get("references").unwrap().is_some());
        assert!(backend.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
