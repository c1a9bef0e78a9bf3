//! ReferencesPanel: the UI binding around a [`ReferenceStore`].
//!
//! The panel owns the edit cursor and the state of the edit surface (the
//! modal form). It drives the store, re-renders through a caller-supplied
//! [`ListRenderer`] after every mutation, and turns outcomes into
//! [`Notice`]s for the user.

use std::fmt;

use refbook_core::{ListView, ReferenceDraft};
use refbook_store::KvStore;

use crate::clipboard::Clipboard;
use crate::error::{RefbookError, Result};
use crate::references::ReferenceStore;

/// Question asked before any delete.
pub const CONFIRM_DELETE: &str = "Delete this reference?";

/// What the next submit will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCursor {
    /// Submit appends a new record.
    New,
    /// Submit replaces the record at this index.
    EditingAt(usize),
}

/// State of the open edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSurface {
    pub cursor: EditCursor,
    /// Current form contents.
    pub draft: ReferenceDraft,
    /// Whether the form shows its delete button.
    pub delete_visible: bool,
}

/// Short user-facing message produced by a panel action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    Removed,
    NameRequired,
    SaveFailed,
    Copied,
    CopyFailed,
}

impl Notice {
    /// The text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Reference saved",
            Notice::Removed => "Reference removed",
            Notice::NameRequired => "Name is required",
            Notice::SaveFailed => "Could not save references",
            Notice::Copied => "References copied",
            Notice::CopyFailed => "Copy failed",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receives the list view whenever it changes.
pub trait ListRenderer {
    fn render(&mut self, view: &ListView);
}

impl<F: FnMut(&ListView)> ListRenderer for F {
    fn render(&mut self, view: &ListView) {
        self(view)
    }
}

/// The references section of the page.
pub struct ReferencesPanel<S: KvStore, R: ListRenderer> {
    store: ReferenceStore<S>,
    renderer: R,
    /// The open edit form, `None` when closed.
    surface: Option<EditSurface>,
}

impl<S: KvStore, R: ListRenderer> ReferencesPanel<S, R> {
    /// Bind a store to a renderer and draw the initial list.
    pub fn mount(store: ReferenceStore<S>, renderer: R) -> Self {
        let mut panel = Self {
            store,
            renderer,
            surface: None,
        };
        panel.refresh();
        panel
    }

    /// Get the store reference.
    pub fn store(&self) -> &ReferenceStore<S> {
        &self.store
    }

    /// Get the renderer reference.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The open edit form, if any.
    pub fn surface(&self) -> Option<&EditSurface> {
        self.surface.as_ref()
    }

    /// Whether the edit form is open.
    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    /// Re-render the current collection.
    pub fn refresh(&mut self) {
        let view = self.store.render();
        self.renderer.render(&view);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit surface
    // ─────────────────────────────────────────────────────────────────────────

    /// Open an empty form for a new record.
    pub fn open_new(&mut self) -> &EditSurface {
        self.surface.insert(EditSurface {
            cursor: EditCursor::New,
            draft: ReferenceDraft::default(),
            delete_visible: false,
        })
    }

    /// Open the form prefilled with the record at `index`.
    pub fn open_edit(&mut self, index: usize) -> Result<&EditSurface> {
        self.store.records().check_index(index)?;
        let draft = self
            .store
            .get(index)
            .map(|r| r.to_draft())
            .unwrap_or_default();

        let surface = self.surface.insert(EditSurface {
            cursor: EditCursor::EditingAt(index),
            draft,
            delete_visible: true,
        });
        Ok(&*surface)
    }

    /// Close the form without saving.
    pub fn cancel(&mut self) {
        self.surface = None;
    }

    /// Save the form.
    ///
    /// Appends or replaces according to the cursor; a closed form behaves as
    /// [`EditCursor::New`]. On a missing name or a storage failure the form
    /// stays open with `draft` in it and nothing is persisted.
    pub fn submit(&mut self, draft: ReferenceDraft) -> Result<Notice> {
        let cursor = self
            .surface
            .as_ref()
            .map(|s| s.cursor)
            .unwrap_or(EditCursor::New);

        let outcome = match cursor {
            EditCursor::New => self.store.add(&draft).map(|_| ()),
            EditCursor::EditingAt(index) => self.store.update(index, &draft),
        };

        match outcome {
            Ok(()) => {
                self.refresh();
                self.surface = None;
                Ok(Notice::Saved)
            }
            Err(e) => {
                let notice = self.recoverable(e)?;
                let surface = self.surface.get_or_insert(EditSurface {
                    cursor,
                    draft: ReferenceDraft::default(),
                    delete_visible: matches!(cursor, EditCursor::EditingAt(_)),
                });
                surface.draft = draft;
                Ok(notice)
            }
        }
    }

    /// The form's delete button. Does nothing unless the form targets an
    /// existing record and `confirm` agrees.
    pub fn delete_current<F>(&mut self, confirm: F) -> Result<Option<Notice>>
    where
        F: FnOnce(&str) -> bool,
    {
        let index = match self.surface.as_ref().map(|s| s.cursor) {
            Some(EditCursor::EditingAt(index)) => index,
            _ => return Ok(None),
        };

        if !confirm(CONFIRM_DELETE) {
            return Ok(None);
        }

        match self.store.remove(index) {
            Ok(_) => {
                self.refresh();
                self.surface = None;
                Ok(Some(Notice::Removed))
            }
            Err(e) => self.recoverable(e).map(Some),
        }
    }

    /// A list row's delete button.
    ///
    /// An open form editing a later record is moved down with it; one
    /// editing the removed record is closed.
    pub fn delete_at<F>(&mut self, index: usize, confirm: F) -> Result<Option<Notice>>
    where
        F: FnOnce(&str) -> bool,
    {
        self.store.records().check_index(index)?;

        if !confirm(CONFIRM_DELETE) {
            return Ok(None);
        }

        if let Err(e) = self.store.remove(index) {
            return self.recoverable(e).map(Some);
        }

        self.refresh();

        match self.surface.as_ref().map(|s| s.cursor) {
            Some(EditCursor::EditingAt(i)) if i == index => self.surface = None,
            Some(EditCursor::EditingAt(i)) if i > index => {
                if let Some(surface) = self.surface.as_mut() {
                    surface.cursor = EditCursor::EditingAt(i - 1);
                }
            }
            _ => {}
        }

        Ok(Some(Notice::Removed))
    }

    /// Copy the plain-text export to `clipboard`.
    pub fn export<C: Clipboard>(&self, clipboard: &mut C) -> Notice {
        match clipboard.write_text(&self.store.export_text()) {
            Ok(()) => Notice::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy references");
                Notice::CopyFailed
            }
        }
    }

    /// Map errors the user can act on to a notice; pass the rest through.
    fn recoverable(&self, e: RefbookError) -> Result<Notice> {
        match e {
            RefbookError::Validation(_) => Ok(Notice::NameRequired),
            RefbookError::Store(e) => {
                tracing::warn!(error = %e, "failed to save references");
                Ok(Notice::SaveFailed)
            }
            other => Err(other),
        }
    }
}
