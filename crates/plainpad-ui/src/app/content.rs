//! The text widget's content as a [`TextStore`].
//!
//! iced's `text_editor::Content` splits text into lines and forgets what
//! separated them: `\r\n` comes back as `\n`, and line breaks at the very end
//! of the text do not come back at all. The wrapper remembers both so a file
//! is written back byte for byte as it was read.

use iced::widget::text_editor;

use plainpad_core::{LineEnding, TextStore};

pub struct EditorContent {
    /// What the widget shows and edits
    pub content: text_editor::Content,

    /// Separator written between lines
    line_ending: LineEnding,

    /// Line breaks after the last line that the widget dropped
    trailing_breaks: usize,
}

impl EditorContent {
    pub fn new() -> Self {
        Self {
            content: text_editor::Content::new(),
            line_ending: LineEnding::default(),
            trailing_breaks: 0,
        }
    }

    /// Returns the line ending used when the text is read back.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Lines as the widget holds them, joined with `separator`.
    fn joined(&self, separator: &str) -> String {
        let mut text = String::new();
        for (i, line) in self.content.lines().enumerate() {
            if i > 0 {
                text.push_str(separator);
            }
            text.push_str(&line);
        }
        text
    }

    fn is_empty(&self) -> bool {
        self.content.line_count() <= 1 && self.joined("\n").is_empty()
    }
}

impl Default for EditorContent {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStore for EditorContent {
    fn text(&self) -> String {
        let ending = self.line_ending.as_str();
        let mut text = self.joined(ending);
        text.push_str(&ending.repeat(self.trailing_breaks));
        text
    }

    fn replace_all(&mut self, text: &str) {
        let normalized = LineEnding::normalize(text);
        self.content = text_editor::Content::with_text(&normalized);
        self.line_ending = LineEnding::detect(text);

        let shown = self.joined("\n");
        self.trailing_breaks = normalized
            .strip_prefix(shown.as_str())
            .map(|rest| rest.matches('\n').count())
            .unwrap_or(0);
    }

    fn line_count(&self) -> usize {
        self.content.line_count() + self.trailing_breaks
    }

    fn after_edit(&mut self) {
        // Clearing everything clears the hidden breaks too.
        if self.is_empty() {
            self.trailing_breaks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor::{Action, Edit, Motion};
    use plainpad_core::{Editor, Outcome, SaveStep};

    fn store_with(text: &str) -> EditorContent {
        let mut store = EditorContent::new();
        store.replace_all(text);
        store
    }

    #[test]
    fn test_empty_store() {
        let store = EditorContent::new();
        assert_eq!(store.text(), "");
        assert_eq!(store.line_count(), 1);
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let store = store_with("line1\nline2\n");
        assert_eq!(store.text(), "line1\nline2\n");
        assert_eq!(store.line_count(), 3);
    }

    #[test]
    fn test_crlf_is_kept() {
        let store = store_with("a\r\nb\r\n");
        assert_eq!(store.line_ending(), LineEnding::CrLf);
        assert_eq!(store.text(), "a\r\nb\r\n");
        assert_eq!(store.line_count(), 3);
    }

    #[test]
    fn test_text_without_final_break() {
        let store = store_with("line1\nline2\nline3");
        assert_eq!(store.text(), "line1\nline2\nline3");
        assert_eq!(store.line_count(), 3);
    }

    #[test]
    fn test_several_trailing_breaks() {
        let store = store_with("a\n\n");
        assert_eq!(store.text(), "a\n\n");
        assert_eq!(store.line_count(), 3);
    }

    #[test]
    fn test_typed_newline_uses_file_line_ending() {
        let mut store = store_with("a\r\nb");
        store.content.perform(Action::Move(Motion::DocumentEnd));
        store.content.perform(Action::Edit(Edit::Enter));
        store.content.perform(Action::Edit(Edit::Insert('c')));
        assert_eq!(store.text(), "a\r\nb\r\nc");
        assert_eq!(store.line_count(), 3);
    }

    #[test]
    fn test_clearing_drops_trailing_breaks() {
        let mut store = store_with("x\n");
        store.content.perform(Action::SelectAll);
        store.content.perform(Action::Edit(Edit::Delete));
        store.after_edit();
        assert_eq!(store.text(), "");
        assert_eq!(store.line_count(), 1);
    }

    #[test]
    fn test_load_edit_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "line1\nline2\n").unwrap();

        let mut editor = Editor::with_store(EditorContent::new());
        assert_eq!(editor.finish_load(Some(path.clone())), Outcome::Completed);
        assert_eq!(editor.document().line_count_label(), "3 L");
        assert_eq!(editor.document().display_name(), "notes.txt");

        editor
            .document_mut()
            .edit(|store| store.content.perform(Action::Edit(Edit::Insert('>'))));
        assert_eq!(editor.document().display_name(), "* notes.txt");

        assert_eq!(editor.request_save(), SaveStep::Done(Outcome::Completed));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ">line1\nline2\n");
        assert_eq!(editor.document().display_name(), "notes.txt");
    }

    #[test]
    fn test_crlf_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "one\r\ntwo\r\n").unwrap();

        let mut editor = Editor::with_store(EditorContent::new());
        editor.finish_load(Some(path.clone()));
        assert_eq!(editor.request_save(), SaveStep::Done(Outcome::Completed));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\r\ntwo\r\n");
    }
}
