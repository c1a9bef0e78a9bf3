//! Reference: a single contact record.
//!
//! A [`Reference`] is always normalized: every field is trimmed and the name is
//! non-empty. User input arrives as a [`ReferenceDraft`] and only becomes a
//! `Reference` through [`crate::validate`].

use serde::{Deserialize, Serialize};

/// The one field a reference cannot omit.
pub const REQUIRED_FIELD: &str = "name";

/// A stored contact record.
///
/// Missing keys in stored data decode as empty strings, so older saves that
/// predate a field still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    /// Display name (non-empty after trimming).
    pub name: String,
    /// Job title or relationship.
    pub role: String,
    /// Organization.
    pub company: String,
    /// Phone number, free text.
    pub phone: String,
    /// Email address, free text.
    pub email: String,
}

impl Reference {
    /// Role and company joined by `sep`, skipping empty parts.
    pub fn subtitle(&self, sep: &str) -> String {
        join_present(&[&self.role, &self.company], sep)
    }

    /// Phone and email joined by `sep`, skipping empty parts.
    pub fn contact_line(&self, sep: &str) -> String {
        join_present(&[&self.phone, &self.email], sep)
    }

    /// Turn this record back into a draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ReferenceDraft {
        ReferenceDraft::from(self.clone())
    }
}

/// Untrimmed user input for a reference.
///
/// Built with the chained setters; nothing is checked until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDraft {
    pub name: String,
    pub role: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl ReferenceDraft {
    /// Start a draft with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the company.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Set the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

impl From<Reference> for ReferenceDraft {
    fn from(r: Reference) -> Self {
        Self {
            name: r.name,
            role: r.role,
            company: r.company,
            phone: r.phone,
            email: r.email,
        }
    }
}

fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}
