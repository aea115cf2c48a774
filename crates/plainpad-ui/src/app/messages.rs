use iced::keyboard;
use iced::widget::text_editor;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    Save,
    Load,

    // Editor
    EditorAction(text_editor::Action),

    // Keyboard
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Dialog results (None when cancelled)
    SavePathPicked(Option<PathBuf>),
    LoadPathPicked(Option<PathBuf>),
}
