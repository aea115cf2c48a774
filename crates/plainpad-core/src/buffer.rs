//! The text store seam.
//!
//! ## Learning: Traits as Seams
//!
//! The document does not care *where* its characters live. In the window
//! they live inside the text widget; in tests they live in a rope. A small
//! trait lets the same dirty-tracking code drive both.

use ropey::Rope;

/// Storage for the text being edited.
pub trait TextStore {
    /// Returns the whole content.
    fn text(&self) -> String;

    /// Replaces the whole content.
    fn replace_all(&mut self, text: &str);

    /// Returns the number of lines. An empty store has one line.
    fn line_count(&self) -> usize;

    /// Called after every text-changing operation.
    fn after_edit(&mut self) {}
}

/// Line ending style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style: \n
    #[default]
    Lf,
    /// Windows-style: \r\n
    CrLf,
    /// Classic Mac: \r
    Cr,
}

impl LineEnding {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Detects line ending from text.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else if text.contains('\r') {
            LineEnding::Cr
        } else {
            LineEnding::Lf
        }
    }

    /// Rewrites every line break in `text` as `\n`.
    pub fn normalize(text: &str) -> String {
        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}

impl TextStore for Rope {
    fn text(&self) -> String {
        self.to_string()
    }

    fn replace_all(&mut self, text: &str) {
        *self = Rope::from_str(text);
    }

    fn line_count(&self) -> usize {
        self.len_lines()
    }
}
