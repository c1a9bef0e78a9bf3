//! Proptest generators for property-based testing.

use proptest::prelude::*;

use refbook_core::{Reference, ReferenceCollection, ReferenceDraft};

/// Free text for an optional field, possibly empty, possibly padded.
pub fn field_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{0,2}[A-Za-z0-9@.+&<>'\" -]{0,24}[ \t]{0,2}".prop_map(String::from),
        "\\PC{0,16}".prop_map(String::from),
    ]
}

/// A name that survives trimming.
pub fn valid_name() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z][A-Za-z .'-]{0,24}[ ]{0,2}".prop_map(String::from)
}

/// A name that is empty after trimming.
pub fn blank_name() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,6}".prop_map(String::from)
}

/// Parameters for a draft.
#[derive(Debug, Clone)]
pub struct DraftParams {
    pub name: String,
    pub role: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl DraftParams {
    /// Build the draft these parameters describe.
    pub fn to_draft(&self) -> ReferenceDraft {
        ReferenceDraft::new(self.name.clone())
            .role(self.role.clone())
            .company(self.company.clone())
            .phone(self.phone.clone())
            .email(self.email.clone())
    }
}

impl Arbitrary for DraftParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            valid_name(),
            field_text(),
            field_text(),
            field_text(),
            field_text(),
        )
            .prop_map(|(name, role, company, phone, email)| DraftParams {
                name,
                role,
                company,
                phone,
                email,
            })
            .boxed()
    }
}

/// A draft that passes validation.
pub fn valid_draft() -> impl Strategy<Value = ReferenceDraft> {
    any::<DraftParams>().prop_map(|p| p.to_draft())
}

/// A draft whose name is blank but whose other fields are arbitrary.
pub fn blank_named_draft() -> impl Strategy<Value = ReferenceDraft> {
    (blank_name(), any::<DraftParams>()).prop_map(|(name, p)| {
        let mut draft = p.to_draft();
        draft.name = name;
        draft
    })
}

/// A normalized record, as the store would hold it.
pub fn reference() -> impl Strategy<Value = Reference> {
    valid_draft().prop_map(|d| {
        refbook_core::validate(&d).unwrap_or_else(|e| panic!("generator produced invalid draft: {}", e))
    })
}

/// A collection of up to `max_len` normalized records.
pub fn collection(max_len: usize) -> impl Strategy<Value = ReferenceCollection> {
    prop::collection::vec(reference(), 0..=max_len).prop_map(ReferenceCollection::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use refbook_core::{decode_collection_checked, encode_collection, validate};

    proptest! {
        #[test]
        fn test_valid_drafts_validate(draft in valid_draft()) {
            prop_assert!(validate(&draft).is_ok());
        }

        #[test]
        fn test_blank_drafts_fail(draft in blank_named_draft()) {
            prop_assert!(validate(&draft).is_err());
        }

        #[test]
        fn test_generated_collections_round_trip(c in collection(8)) {
            let encoded = encode_collection(&c).unwrap();
            prop_assert_eq!(decode_collection_checked(&encoded).unwrap(), c);
        }
    }
}
