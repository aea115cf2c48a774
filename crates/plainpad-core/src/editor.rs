//! Save / Load controller.
//!
//! ## Learning: Splitting Around a Dialog
//!
//! A native file dialog is asynchronous from the UI's point of view: the
//! window asks for it, keeps running, and later receives the user's choice
//! as a message. So each operation is split in two halves:
//!
//! 1. [`Editor::request_save`] either writes straight away or reports that a
//!    path must be picked first.
//! 2. [`Editor::finish_save`] / [`Editor::finish_load`] take the dialog's
//!    answer (`None` for cancel) and complete the operation.
//!
//! I/O failures never reach the caller as errors. They are logged and
//! swallowed here, and show up only as the state they leave behind.

use ropey::Rope;
use std::path::PathBuf;

use crate::buffer::TextStore;
use crate::document::Document;

/// Directory the save and open dialogs start in: the user's home.
pub fn dialog_directory() -> Option<PathBuf> {
    dirs::home_dir()
}

/// How a save or load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was written or read.
    Completed,
    /// The user dismissed the dialog; nothing changed.
    Cancelled,
    /// An I/O error was logged.
    Failed,
}

/// First half of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStep {
    /// The document already had a path and the save has run.
    Done(Outcome),
    /// No path yet; show a save dialog and call [`Editor::finish_save`].
    PickPath,
}

/// Owns the document and applies the save/load policy to it.
#[derive(Debug)]
pub struct Editor<S = Rope> {
    document: Document<S>,
}

impl Editor<Rope> {
    /// Creates an editor around an empty rope-backed document.
    pub fn new() -> Self {
        Self::with_store(Rope::new())
    }
}

impl Default for Editor<Rope> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextStore> Editor<S> {
    /// Creates an editor around an empty document backed by `store`.
    pub fn with_store(store: S) -> Self {
        Self {
            document: Document::with_store(store),
        }
    }

    /// Returns the document.
    pub fn document(&self) -> &Document<S> {
        &self.document
    }

    /// Returns the document for editing.
    pub fn document_mut(&mut self) -> &mut Document<S> {
        &mut self.document
    }

    // ==================== Save ====================

    /// Starts a save. Writes immediately when a path is already known.
    pub fn request_save(&mut self) -> SaveStep {
        if self.document.path().is_some() {
            SaveStep::Done(self.write())
        } else {
            SaveStep::PickPath
        }
    }

    /// Completes a save with the path picked in the save dialog.
    pub fn finish_save(&mut self, choice: Option<PathBuf>) -> Outcome {
        let Some(path) = choice else {
            tracing::debug!("save dialog cancelled");
            return Outcome::Cancelled;
        };

        self.document.set_path(path);
        self.write()
    }

    fn write(&mut self) -> Outcome {
        match self.document.write_to_disk() {
            Ok(()) => {
                tracing::info!(file = %self.document.basename(), "saved");
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("save failed: {}", e);
                Outcome::Failed
            }
        }
    }

    // ==================== Load ====================

    /// Completes a load with the path picked in the open dialog.
    pub fn finish_load(&mut self, choice: Option<PathBuf>) -> Outcome {
        let Some(path) = choice else {
            tracing::debug!("open dialog cancelled");
            return Outcome::Cancelled;
        };

        match self.document.read_from_disk(path) {
            Ok(()) => {
                tracing::info!(
                    file = %self.document.basename(),
                    lines = self.document.line_count(),
                    "loaded"
                );
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("load failed: {}", e);
                Outcome::Failed
            }
        }
    }
}
