//! # Refbook Store
//!
//! Durable key-value storage for Refbook. Provides a trait-based interface
//! with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store module abstracts string storage behind the [`KvStore`] trait,
//! allowing the record manager to be storage-agnostic. The durable
//! implementation is [`SqliteStore`], with [`MemoryStore`] for testing.
//!
//! ## Key Types
//!
//! - [`KvStore`] - The trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage for tests, with an optional quota
//!
//! ## Usage
//!
//! ```rust,no_run
//! use refbook_store::{KvStore, SqliteStore};
//!
//! fn example() -> refbook_store::Result<()> {
//!     // Open a SQLite database
//!     let store = SqliteStore::open("refbook.db")?;
//!
//!     store.set("mr-refs", "[]")?;
//!     assert_eq!(store.get("mr-refs")?.as_deref(), Some("[]"));
//!     Ok(())
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-value writes**: `set` replaces the value; there are no partial updates
//! - **Absence is not an error**: `get` on a missing key returns `Ok(None)`
//! - **Quota**: `MemoryStore::with_quota` fails writes the way a full browser store does

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KvStore;
