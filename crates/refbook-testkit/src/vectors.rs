//! Golden test vectors for the stored format, rendering, and export.
//!
//! Each vector pins the exact text a collection produces, so a change to
//! separators, escaping, or the wire layout shows up as a failing vector.

use refbook_core::{
    encode_collection, export_text, render_list, validate, ReferenceCollection, ReferenceDraft,
};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Records as `(name, role, company, phone, email)`, before trimming.
    pub records: &'static [(&'static str, &'static str, &'static str, &'static str, &'static str)],
    /// Expected stored JSON.
    pub expected_stored: &'static str,
    /// Expected plain-text export.
    pub expected_export: &'static str,
    /// Expected list markup.
    pub expected_html: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty collection",
            records: &[],
            expected_stored: "[]",
            expected_export: "",
            expected_html: r#"<div class="muted">No references yet. Click “Add reference”.</div>"#,
        },
        GoldenVector {
            name: "Jane Doe with email only",
            records: &[("Jane Doe", "Manager", "Acme", "", "jane@acme.com")],
            expected_stored: r#"[{"name":"Jane Doe","role":"Manager","company":"Acme","phone":"","email":"jane@acme.com"}]"#,
            expected_export: "Jane Doe\nManager — Acme\njane@acme.com",
            expected_html: concat!(
                r#"<div class="ref-card" data-idx="0"><div><h4>Jane Doe</h4>"#,
                r#"<div class="ref-meta">Manager — Acme</div>"#,
                r#"<div class="ref-meta">jane@acme.com</div></div>"#,
                r#"<div class="ref-actions">"#,
                r#"<button class="btn ref-edit" title="Edit"><i class="fa-regular fa-pen-to-square"></i></button>"#,
                r#"<button class="btn ref-del" title="Delete"><i class="fa-regular fa-trash-can"></i></button>"#,
                r#"</div></div>"#,
            ),
        },
        GoldenVector {
            name: "padded input and markup characters",
            records: &[
                ("  Tom & \"Jerry\" ", " <Lead> ", "", " 555 ", ""),
                ("O'Brien", "", "R&D", "", ""),
            ],
            expected_stored: r#"[{"name":"Tom & \"Jerry\"","role":"<Lead>","company":"","phone":"555","email":""},{"name":"O'Brien","role":"","company":"R&D","phone":"","email":""}]"#,
            expected_export: "Tom & \"Jerry\"\n<Lead>\n555\n\nO'Brien\nR&D",
            expected_html: concat!(
                r#"<div class="ref-card" data-idx="0"><div><h4>Tom &amp; &quot;Jerry&quot;</h4>"#,
                r#"<div class="ref-meta">&lt;Lead&gt;</div>"#,
                r#"<div class="ref-meta">555</div></div>"#,
                r#"<div class="ref-actions">"#,
                r#"<button class="btn ref-edit" title="Edit"><i class="fa-regular fa-pen-to-square"></i></button>"#,
                r#"<button class="btn ref-del" title="Delete"><i class="fa-regular fa-trash-can"></i></button>"#,
                r#"</div></div>"#,
                r#"<div class="ref-card" data-idx="1"><div><h4>O&#39;Brien</h4>"#,
                r#"<div class="ref-meta">R&amp;D</div></div>"#,
                r#"<div class="ref-actions">"#,
                r#"<button class="btn ref-edit" title="Edit"><i class="fa-regular fa-pen-to-square"></i></button>"#,
                r#"<button class="btn ref-del" title="Delete"><i class="fa-regular fa-trash-can"></i></button>"#,
                r#"</div></div>"#,
            ),
        },
        GoldenVector {
            name: "name only",
            records: &[("Solo", "", "", "", "")],
            expected_stored: r#"[{"name":"Solo","role":"","company":"","phone":"","email":""}]"#,
            expected_export: "Solo",
            expected_html: concat!(
                r#"<div class="ref-card" data-idx="0"><div><h4>Solo</h4>"#,
                r#"<div class="ref-meta"></div></div>"#,
                r#"<div class="ref-actions">"#,
                r#"<button class="btn ref-edit" title="Edit"><i class="fa-regular fa-pen-to-square"></i></button>"#,
                r#"<button class="btn ref-del" title="Delete"><i class="fa-regular fa-trash-can"></i></button>"#,
                r#"</div></div>"#,
            ),
        },
    ]
}

/// Build the collection a vector describes, validating each record.
pub fn collection_from_vector(vector: &GoldenVector) -> ReferenceCollection {
    vector
        .records
        .iter()
        .map(|&(name, role, company, phone, email)| {
            let draft = ReferenceDraft::new(name)
                .role(role)
                .company(company)
                .phone(phone)
                .email(email);
            validate(&draft)
                .unwrap_or_else(|e| panic!("vector {:?} has an invalid record: {}", vector.name, e))
        })
        .collect()
}

/// Check every vector, returning the names of the ones that disagree.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .into_iter()
        .filter(|v| {
            let c = collection_from_vector(v);
            let stored = encode_collection(&c).ok();
            stored.as_deref() != Some(v.expected_stored)
                || export_text(&c) != v.expected_export
                || render_list(&c).to_html() != v.expected_html
        })
        .map(|v| v.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use refbook_core::decode_collection;

    #[test]
    fn test_all_vectors_hold() {
        let failing = verify_all_vectors();
        assert!(failing.is_empty(), "failing vectors: {:?}", failing);
    }

    #[test]
    fn test_stored_vectors_decode_back() {
        for v in all_vectors() {
            let decoded = decode_collection(v.expected_stored).unwrap();
            assert_eq!(decoded, collection_from_vector(&v), "vector {}", v.name);
        }
    }

    #[test]
    fn test_vector_json_is_valid() {
        for v in all_vectors() {
            let value: serde_json::Value = serde_json::from_str(v.expected_stored).unwrap();
            assert!(value.is_array(), "vector {}", v.name);
        }
    }
}
