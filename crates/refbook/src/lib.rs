//! # Refbook
//!
//! A small local record manager for contact references: an ordered list of
//! records kept in memory, mirrored to a durable key-value store, edited
//! through a form, rendered into a list, and exportable as plain text.
//!
//! ## Overview
//!
//! - **ReferenceStore**: owns the collection and the CRUD contract
//!   (`load`, `save`, `add`, `update`, `remove`, `validate`)
//! - **ReferencesPanel**: the UI binding; holds the edit cursor, asks for
//!   delete confirmation, re-renders after every change, produces notices
//! - **Clipboard**: where exported text goes
//!
//! ## Key Concepts
//!
//! - **Positional identity**: a record is addressed by its index in the list.
//! - **Whole-collection persistence**: every mutation rewrites the full list.
//! - **Permissive load**: missing or corrupt stored data loads as empty.
//! - **All-or-nothing mutations**: a failed save leaves the list unchanged.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use refbook::{ListView, RefbookConfig, ReferenceDraft, ReferenceStore, ReferencesPanel};
//! use refbook::store::SqliteStore;
//!
//! fn example() -> refbook::Result<()> {
//!     let backend = SqliteStore::open("refbook.db")?;
//!     let store = ReferenceStore::open(backend, RefbookConfig::default());
//!
//!     let mut panel = ReferencesPanel::mount(store, |view: &ListView| {
//!         println!("{}", view.to_html());
//!     });
//!
//!     panel.open_new();
//!     let notice = panel.submit(ReferenceDraft::new("Jane Doe").company("Acme"))?;
//!     println!("{}", notice);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `refbook::core` - Records, validation, codec, rendering, export
//! - `refbook::store` - Key-value storage and its backends

pub mod clipboard;
pub mod error;
pub mod panel;
pub mod references;

// Re-export component crates
pub use refbook_core as core;
pub use refbook_store as store;

// Re-export main types for convenience
pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::{ClipboardError, RefbookError, Result};
pub use panel::{EditCursor, EditSurface, ListRenderer, Notice, ReferencesPanel, CONFIRM_DELETE};
pub use references::{RefbookConfig, ReferenceStore, DEFAULT_STORAGE_KEY};

// Re-export commonly used core types
pub use refbook_core::{
    escape_html, export_text, render_list, validate, DisplayEntry, ListView, OutOfRange,
    Reference, ReferenceCollection, ReferenceDraft, ValidationError,
};
pub use refbook_store::{KvStore, MemoryStore, SqliteStore, StoreError};
