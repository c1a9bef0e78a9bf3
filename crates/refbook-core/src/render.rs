//! List rendering for display.
//!
//! [`render_list`] turns a collection into a [`ListView`] whose text is
//! already escaped for embedding in markup. [`ListView::to_html`] produces the
//! card markup used by the page.

use crate::collection::ReferenceCollection;
use crate::reference::Reference;

/// Separator between role and company in a subtitle.
pub const SUBTITLE_SEPARATOR: &str = " — ";

/// Placeholder shown when there are no references.
pub const EMPTY_MESSAGE: &str = "No references yet. Click “Add reference”.";

/// Escape text for safe embedding in HTML.
///
/// Uses a fixed table: `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One rendered row. All text fields are escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    /// Position in the collection; the edit/delete target for this row.
    pub index: usize,
    pub name: String,
    /// Role and company joined with [`SUBTITLE_SEPARATOR`]; may be empty.
    pub subtitle: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl DisplayEntry {
    fn from_reference(index: usize, r: &Reference) -> Self {
        Self {
            index,
            name: escape_html(&r.name),
            subtitle: escape_html(&r.subtitle(SUBTITLE_SEPARATOR)),
            phone: present(&r.phone).map(escape_html),
            email: present(&r.email).map(escape_html),
        }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// No records: a single placeholder message.
    Empty { message: String },
    /// One entry per record, in display order.
    Entries(Vec<DisplayEntry>),
}

impl ListView {
    /// Entries, or an empty slice for the placeholder view.
    pub fn entries(&self) -> &[DisplayEntry] {
        match self {
            ListView::Empty { .. } => &[],
            ListView::Entries(entries) => entries,
        }
    }

    /// Render the view as card markup.
    pub fn to_html(&self) -> String {
        match self {
            ListView::Empty { message } => format!(r#"<div class="muted">{}</div>"#, message),
            ListView::Entries(entries) => entries.iter().map(entry_html).collect(),
        }
    }
}

/// Render a collection into a list view.
pub fn render_list(collection: &ReferenceCollection) -> ListView {
    if collection.is_empty() {
        return ListView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }

    ListView::Entries(
        collection
            .iter()
            .enumerate()
            .map(|(i, r)| DisplayEntry::from_reference(i, r))
            .collect(),
    )
}

fn entry_html(entry: &DisplayEntry) -> String {
    let mut html = format!(
        r#"<div class="ref-card" data-idx="{}"><div><h4>{}</h4><div class="ref-meta">{}</div>"#,
        entry.index, entry.name, entry.subtitle
    );
    for line in [&entry.phone, &entry.email].into_iter().flatten() {
        html.push_str(&format!(r#"<div class="ref-meta">{}</div>"#, line));
    }
    html.push_str(concat!(
        r#"</div><div class="ref-actions">"#,
        r#"<button class="btn ref-edit" title="Edit"><i class="fa-regular fa-pen-to-square"></i></button>"#,
        r#"<button class="btn ref-del" title="Delete"><i class="fa-regular fa-trash-can"></i></button>"#,
        r#"</div></div>"#,
    ));
    html
}

fn present(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
