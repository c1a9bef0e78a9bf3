//! Wire format for a stored collection.
//!
//! The whole collection is encoded as a single JSON array of objects with the
//! keys `name`, `role`, `company`, `phone` and `email`:
//!
//! ```json
//! [{"name":"Jane Doe","role":"Manager","company":"Acme","phone":"","email":"jane@acme.com"}]
//! ```
//!
//! Decoding is whole-or-nothing. A value that is not an array of such objects
//! is rejected as a unit; no attempt is made to salvage individual entries.
//! The literal `null` decodes as an empty collection.

use crate::collection::ReferenceCollection;
use crate::error::CoreError;
use crate::validation::validate_reference;

/// Encode a collection to its stored form.
pub fn encode_collection(collection: &ReferenceCollection) -> Result<String, CoreError> {
    Ok(serde_json::to_string(collection)?)
}

/// Decode a stored collection.
///
/// Records are taken as stored; see [`decode_collection_checked`] to also
/// enforce the non-empty name invariant.
pub fn decode_collection(raw: &str) -> Result<ReferenceCollection, CoreError> {
    let parsed: Option<ReferenceCollection> = serde_json::from_str(raw)?;
    Ok(parsed.unwrap_or_default())
}

/// Decode a stored collection and reject it if any record has a blank name.
pub fn decode_collection_checked(raw: &str) -> Result<ReferenceCollection, CoreError> {
    let collection = decode_collection(raw)?;

    for (i, reference) in collection.iter().enumerate() {
        validate_reference(reference)
            .map_err(|e| CoreError::MalformedCollection(format!("record {}: {}", i, e)))?;
    }

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Reference;

    fn jane() -> Reference {
        Reference {
            name: "Jane Doe".into(),
            role: "Manager".into(),
            company: "Acme".into(),
            phone: String::new(),
            email: "jane@acme.com".into(),
        }
    }

    #[test]
    fn test_encoding_shape() {
        let c = ReferenceCollection::from(vec![jane()]);
        let encoded = encode_collection(&c).unwrap();
        assert_eq!(
            encoded,
            r#"[{"name":"Jane Doe","role":"Manager","company":"Acme","phone":"","email":"jane@acme.com"}]"#
        );
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let mut second = jane();
        second.name = "John Roe".into();
        second.phone = "+1 555 0100".into();

        let c = ReferenceCollection::from(vec![jane(), second]);
        let decoded = decode_collection(&encode_collection(&c).unwrap()).unwrap();
        assert_eq!(decoded, c);
    }

    #[test]
    fn test_null_is_empty() {
        assert!(decode_collection("null").unwrap().is_empty());
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_rejected() {
        for raw in ["not-json", "", "{}", "[1,2]", r#"[{"name":5}]"#, "[{\"name\":\"a\"}"] {
            assert!(
                matches!(decode_collection(raw), Err(CoreError::DecodingError(_))),
                "expected decoding error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_checked_rejects_blank_name() {
        let raw = r#"[{"name":"ok"},{"name":"   ","email":"x@y"}]"#;
        assert!(decode_collection(raw).is_ok());

        let err = decode_collection_checked(raw).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCollection(ref m) if m.starts_with("record 1")));
    }
}
