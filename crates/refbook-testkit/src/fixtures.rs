//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use refbook::{RefbookConfig, ReferenceStore};
use refbook_core::ReferenceDraft;
use refbook_store::{KvStore, MemoryStore};

/// A test fixture with a shared in-memory backend.
///
/// Stores opened from the same fixture see the same data, which stands in for
/// reloading the page.
pub struct TestFixture {
    pub backend: Arc<MemoryStore>,
    pub config: RefbookConfig,
}

impl TestFixture {
    /// Create a fixture with an empty backend and default configuration.
    pub fn new() -> Self {
        Self {
            backend: Arc::new(MemoryStore::new()),
            config: RefbookConfig::default(),
        }
    }

    /// Create a fixture whose backend rejects writes past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            backend: Arc::new(MemoryStore::with_quota(bytes)),
            config: RefbookConfig::default(),
        }
    }

    /// Open a store over the shared backend.
    pub fn open(&self) -> ReferenceStore<Arc<MemoryStore>> {
        ReferenceStore::open(self.backend.clone(), self.config.clone())
    }

    /// Open a store already holding `drafts`, in order.
    pub fn seeded(&self, drafts: &[ReferenceDraft]) -> ReferenceStore<Arc<MemoryStore>> {
        let mut store = self.open();
        for draft in drafts {
            store
                .add(draft)
                .unwrap_or_else(|e| panic!("seeding {:?} failed: {}", draft.name, e));
        }
        store
    }

    /// Put a raw value under the configured storage key.
    pub fn write_raw(&self, value: &str) {
        self.backend
            .set(&self.config.storage_key, value)
            .unwrap_or_else(|e| panic!("raw write failed: {}", e));
    }

    /// The raw value under the configured storage key.
    pub fn read_raw(&self) -> Option<String> {
        self.backend
            .get(&self.config.storage_key)
            .unwrap_or_else(|e| panic!("raw read failed: {}", e))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The "Jane Doe" reference used throughout the scenarios.
pub fn jane_doe() -> ReferenceDraft {
    ReferenceDraft::new("Jane Doe")
        .role("Manager")
        .company("Acme")
        .phone("")
        .email("jane@acme.com")
}

/// A few distinct references with varied optional fields.
pub fn sample_drafts() -> Vec<ReferenceDraft> {
    vec![
        jane_doe(),
        ReferenceDraft::new("John Roe").company("Initech").phone("+1 555 0100"),
        ReferenceDraft::new("Ana Lima").role("Professor"),
        ReferenceDraft::new("Kim <Lee>").email("kim@example.org"),
    ]
}
