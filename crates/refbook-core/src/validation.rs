//! Draft validation: trimming and the required-name check.

use crate::error::ValidationError;
use crate::reference::{Reference, ReferenceDraft, REQUIRED_FIELD};

/// Validate a draft and normalize it into a [`Reference`].
///
/// This performs:
/// - Trimming of all five fields
/// - The required-name check on the trimmed value
///
/// No format checks are applied to phone or email.
pub fn validate(draft: &ReferenceDraft) -> Result<Reference, ValidationError> {
    let reference = Reference {
        name: draft.name.trim().to_string(),
        role: draft.role.trim().to_string(),
        company: draft.company.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        email: draft.email.trim().to_string(),
    };

    validate_reference(&reference)?;
    Ok(reference)
}

/// Check an already-built record against the collection invariant.
///
/// Useful for records that did not come through [`validate`], such as ones
/// decoded from storage.
pub fn validate_reference(reference: &Reference) -> Result<(), ValidationError> {
    if reference.name.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField(REQUIRED_FIELD));
    }
    Ok(())
}
