//! # Refbook Testkit
//!
//! Testing utilities for Refbook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known collections with their exact stored, exported and rendered text
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use refbook_testkit::vectors::{all_vectors, collection_from_vector};
//!
//! for vector in all_vectors() {
//!     let collection = collection_from_vector(&vector);
//!     println!("{}: {} records", vector.name, collection.len());
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use refbook_testkit::generators::DraftParams;
//!
//! proptest! {
//!     #[test]
//!     fn drafts_validate(params: DraftParams) {
//!         prop_assert!(refbook_core::validate(&params.to_draft()).is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use refbook_testkit::fixtures::{jane_doe, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let store = fixture.seeded(&[jane_doe()]);
//! assert_eq!(store.len(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{jane_doe, sample_drafts, TestFixture};
pub use generators::{collection, valid_draft, DraftParams};
pub use vectors::{all_vectors, collection_from_vector, verify_all_vectors, GoldenVector};
