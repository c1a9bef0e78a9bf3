//! ReferenceCollection: the ordered list of references.
//!
//! Insertion order is display order and identity is positional. The
//! collection is persisted as a whole; there is no per-record storage.

use serde::{Deserialize, Serialize};

use crate::error::OutOfRange;
use crate::reference::Reference;

/// An ordered sequence of references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCollection(Vec<Reference>);

impl ReferenceCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection has no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the record at a position.
    pub fn get(&self, index: usize) -> Option<&Reference> {
        self.0.get(index)
    }

    /// Iterate over records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reference> {
        self.0.iter()
    }

    /// All records as a slice.
    pub fn as_slice(&self) -> &[Reference] {
        &self.0
    }

    /// Append a record and return its index.
    pub fn push(&mut self, reference: Reference) -> usize {
        self.0.push(reference);
        self.0.len() - 1
    }

    /// Replace the record at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, reference: Reference) -> Result<Reference, OutOfRange> {
        let len = self.0.len();
        let slot = self.0.get_mut(index).ok_or(OutOfRange { index, len })?;
        Ok(std::mem::replace(slot, reference))
    }

    /// Remove the record at `index`, shifting later records down.
    pub fn remove(&mut self, index: usize) -> Result<Reference, OutOfRange> {
        self.check_index(index)?;
        Ok(self.0.remove(index))
    }

    /// Ensure `index` names an existing record.
    pub fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(OutOfRange {
                index,
                len: self.0.len(),
            })
        }
    }
}

impl From<Vec<Reference>> for ReferenceCollection {
    fn from(records: Vec<Reference>) -> Self {
        Self(records)
    }
}

impl FromIterator<Reference> for ReferenceCollection {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ReferenceCollection {
    type Item = Reference;
    type IntoIter = std::vec::IntoIter<Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceCollection {
    type Item = &'a Reference;
    type IntoIter = std::slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
