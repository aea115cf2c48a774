//! The single document being edited.
//!
//! ## Learning: Derived State
//!
//! The window shows two pieces of text that depend on the document: the
//! filename label (with a `"* "` prefix while there are unsaved edits) and
//! the line count. Neither is stored. They are computed from the path, the
//! dirty flag and the text store whenever the view asks for them, so they
//! can never drift out of sync with the state they describe.

use ropey::Rope;
use std::path::{Path, PathBuf};

use crate::buffer::TextStore;
use crate::{CoreError, CoreResult};

/// Prefix shown in front of the filename while there are unsaved edits.
pub const DIRTY_MARKER: &str = "* ";

/// Name shown when the document has no associated file.
pub const UNTITLED_NAME: &str = "No file";

/// A text buffer plus the file it belongs to.
#[derive(Debug, Clone)]
pub struct Document<S = Rope> {
    /// The text being edited
    store: S,

    /// File path (None until the first save or load)
    path: Option<PathBuf>,

    /// True when the text changed since the last successful save or load
    dirty: bool,
}

impl Document<Rope> {
    /// Creates a new empty, rope-backed document.
    pub fn new() -> Self {
        Self::with_store(Rope::new())
    }
}

impl Default for Document<Rope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextStore> Document<S> {
    /// Wraps an existing store. The document starts clean and untitled.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            path: None,
            dirty: false,
        }
    }

    // ==================== Getters ====================

    /// Returns the text store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the text store for changes that leave the text untouched
    /// (cursor movement, selection, scrolling).
    ///
    /// Anything that inserts or deletes must go through [`Document::edit`].
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns all text.
    pub fn text(&self) -> String {
        self.store.text()
    }

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the line count.
    pub fn line_count(&self) -> usize {
        self.store.line_count()
    }

    /// Returns the status bar text, e.g. `"3 L"`.
    pub fn line_count_label(&self) -> String {
        format!("{} L", self.line_count())
    }

    /// Returns the file name without directories, or [`UNTITLED_NAME`].
    pub fn basename(&self) -> String {
        match &self.path {
            Some(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => UNTITLED_NAME.to_string(),
        }
    }

    /// Returns the filename label, e.g. `"* notes.txt"`.
    pub fn display_name(&self) -> String {
        if self.dirty {
            format!("{}{}", DIRTY_MARKER, self.basename())
        } else {
            self.basename()
        }
    }

    // ==================== Editing ====================

    /// Runs a text-changing operation against the store and fires the
    /// edit notification afterwards.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.store);
        self.store.after_edit();
        self.on_changed();
        result
    }

    /// Replaces the whole text. Counts as an edit.
    pub fn replace_text(&mut self, text: &str) {
        self.edit(|store| store.replace_all(text));
    }

    /// Edit notification: every insertion, deletion or replacement lands here.
    fn on_changed(&mut self) {
        self.dirty = true;
        tracing::trace!(lines = self.line_count(), "document changed");
    }

    /// Associates the document with a file without touching the text.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    // ==================== File Operations ====================

    /// Writes the whole text to the associated path, overwriting it.
    ///
    /// On success the dirty flag is cleared; on failure it is left alone.
    pub fn write_to_disk(&mut self) -> CoreResult<()> {
        let path = self.path.as_ref().ok_or(CoreError::NoPath)?;
        std::fs::write(path, self.store.text()).map_err(|e| CoreError::io(path, e))?;
        self.dirty = false;
        Ok(())
    }

    /// Associates the document with `path` and replaces the text with the
    /// file's contents.
    ///
    /// The path is taken before reading, so a failed read still leaves the
    /// new name in place while the old text stays in the store.
    pub fn read_from_disk(&mut self, path: impl Into<PathBuf>) -> CoreResult<()> {
        let path = path.into();
        self.set_path(path.clone());

        let content = std::fs::read_to_string(&path).map_err(|e| CoreError::io(&path, e))?;

        // Replacement fires the edit notification; clear afterwards.
        self.replace_text(&content);
        self.dirty = false;
        Ok(())
    }
}
