//! Plain-text export of a collection, e.g. for the clipboard.

use crate::collection::ReferenceCollection;
use crate::reference::Reference;
use crate::render::SUBTITLE_SEPARATOR;

/// Separator between phone and email on the contact line.
pub const CONTACT_SEPARATOR: &str = " • ";

/// Export the collection as plain text.
///
/// One block per record, blocks separated by a blank line. A block is the
/// name, then role/company, then phone/email; the last two lines are dropped
/// when both of their parts are empty. Text is not escaped.
pub fn export_text(collection: &ReferenceCollection) -> String {
    collection
        .iter()
        .map(export_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn export_block(r: &Reference) -> String {
    let mut lines = vec![r.name.clone()];

    let subtitle = r.subtitle(SUBTITLE_SEPARATOR);
    if !subtitle.is_empty() {
        lines.push(subtitle);
    }

    let contact = r.contact_line(CONTACT_SEPARATOR);
    if !contact.is_empty() {
        lines.push(contact);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        assert_eq!(export_text(&ReferenceCollection::new()), "");
    }

    #[test]
    fn test_blocks() {
        let c = ReferenceCollection::from(vec![
            Reference {
                name: "Jane Doe".into(),
                role: "Manager".into(),
                company: "Acme".into(),
                phone: "555-0100".into(),
                email: "jane@acme.com".into(),
            },
            Reference {
                name: "Only Name".into(),
                ..Reference::default()
            },
            Reference {
                name: "No Job".into(),
                email: "nj@x.io".into(),
                ..Reference::default()
            },
        ]);

        assert_eq!(
            export_text(&c),
            "Jane Doe\nManager — Acme\n555-0100 • jane@acme.com\n\nOnly Name\n\nNo Job\nnj@x.io"
        );
    }

    #[test]
    fn test_not_escaped() {
        let c = ReferenceCollection::from(vec![Reference {
            name: "A & B <co>".into(),
            ..Reference::default()
        }]);
        assert_eq!(export_text(&c), "A & B <co>");
    }
}
