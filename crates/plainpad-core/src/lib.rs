//! # Plainpad Core
//!
//! Everything the editor window needs that is not drawing pixels.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    Editor                     │
//! │   Save / Load / Edit, failure policy          │
//! │  ┌────────────────────────────────────────┐  │
//! │  │               Document                  │  │
//! │  │  TextStore │ path │ dirty flag          │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//!        Keymap (chord -> action)     Config
//! ```
//!
//! The UI crate supplies its own [`TextStore`] (the widget's content), so
//! everything in here can be exercised headlessly with a [`ropey::Rope`].

pub mod buffer;
pub mod config;
pub mod document;
pub mod editor;
pub mod keymap;

pub use buffer::{LineEnding, TextStore};
pub use config::Config;
pub use document::{Document, DIRTY_MARKER, UNTITLED_NAME};
pub use editor::{dialog_directory, Editor, Outcome, SaveStep};
pub use keymap::{Action, KeyBinding, Keymap, Modifiers};

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document has no file path")]
    NoPath,

    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
        }
    }
}
