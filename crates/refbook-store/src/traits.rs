//! KvStore trait: the abstract interface for durable string storage.
//!
//! This trait keeps the record manager storage-agnostic. Implementations
//! include SQLite (durable) and in-memory (for tests).

use std::sync::Arc;

use crate::error::Result;

/// A durable key-value store holding string values.
///
/// Modelled on browser local storage: values are whole strings, writes
/// replace the previous value, and there are no partial updates or
/// transactions across keys.
///
/// # Design Notes
///
/// - **Absent keys**: `get` returns `Ok(None)`; absence is not an error.
/// - **Overwrite**: `set` always replaces; there is no compare-and-swap.
/// - **Failures**: backend problems (quota, database) are returned as
///   [`StoreError`](crate::StoreError) and never panic.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
