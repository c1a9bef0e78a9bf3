//! # Refbook Core
//!
//! Pure primitives for Refbook: reference records, validation, the stored
//! wire format, list rendering and plain-text export.
//!
//! This crate contains no I/O and no storage. It is pure computation over the
//! record model.
//!
//! ## Key Types
//!
//! - [`Reference`] - A normalized contact record
//! - [`ReferenceDraft`] - Untrimmed user input, validated into a `Reference`
//! - [`ReferenceCollection`] - The ordered list that is persisted as a whole
//! - [`ListView`] - Escaped display entries for the list area
//!
//! ## Wire Format
//!
//! Collections are stored as a JSON array of objects. See [`codec`] module.

pub mod codec;
pub mod collection;
pub mod error;
pub mod export;
pub mod reference;
pub mod render;
pub mod validation;

pub use codec::{decode_collection, decode_collection_checked, encode_collection};
pub use collection::ReferenceCollection;
pub use error::{CoreError, OutOfRange, ValidationError};
pub use export::{export_text, CONTACT_SEPARATOR};
pub use reference::{Reference, ReferenceDraft, REQUIRED_FIELD};
pub use render::{escape_html, render_list, DisplayEntry, ListView, EMPTY_MESSAGE, SUBTITLE_SEPARATOR};
pub use validation::{validate, validate_reference};
