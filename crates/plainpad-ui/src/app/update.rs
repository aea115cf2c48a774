use iced::widget::text_editor::{Binding, KeyPress, Status};
use iced::{keyboard, Task};
use std::path::PathBuf;

use plainpad_core::{dialog_directory, Action, Keymap, Modifiers, SaveStep};

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Save => match self.editor.request_save() {
                SaveStep::Done(_) => {}
                SaveStep::PickPath => {
                    return Task::perform(pick_save_path(), Message::SavePathPicked);
                }
            },

            Message::Load => {
                return Task::perform(pick_open_path(), Message::LoadPathPicked);
            }

            Message::SavePathPicked(choice) => {
                self.editor.finish_save(choice);
            }

            Message::LoadPathPicked(choice) => {
                self.editor.finish_load(choice);
            }

            Message::EditorAction(action) => {
                let document = self.editor.document_mut();
                if action.is_edit() {
                    document.edit(|store| store.content.perform(action));
                } else {
                    document.store_mut().content.perform(action);
                }
            }

            Message::KeyPressed(key, modifiers) => {
                if let Some(message) = shortcut(&self.keymap, &key, modifiers) {
                    return self.update(message);
                }
            }
        }
        Task::none()
    }
}

/// Resolves a key press to the message its shortcut triggers.
pub fn shortcut(
    keymap: &Keymap,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<Message> {
    let keyboard::Key::Character(c) = key else {
        return None;
    };

    let action = keymap.lookup(to_core_modifiers(modifiers), c.as_str())?;
    tracing::debug!(?action, "shortcut");
    Some(match action {
        Action::Save => Message::Save,
        Action::Load => Message::Load,
    })
}

/// Key handling for the focused text area.
///
/// The text area would otherwise type the letter of a Cmd/Super chord and
/// swallow the key press, so shortcuts are resolved here first.
pub fn editor_binding(keymap: &Keymap, key_press: KeyPress) -> Option<Binding<Message>> {
    if matches!(key_press.status, Status::Focused) {
        if let Some(message) = shortcut(keymap, &key_press.key, key_press.modifiers) {
            return Some(Binding::Custom(message));
        }
    }
    Binding::from_key_press(key_press)
}

pub fn to_core_modifiers(modifiers: keyboard::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.control(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo(),
    }
}

async fn pick_save_path() -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new();
    if let Some(dir) = dialog_directory() {
        dialog = dialog.set_directory(dir);
    }
    dialog
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn pick_open_path() -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new();
    if let Some(dir) = dialog_directory() {
        dialog = dialog.set_directory(dir);
    }
    dialog
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text_editor;
    use plainpad_core::Config;

    fn key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn test_ctrl_s_saves() {
        let keymap = Keymap::default();
        let message = shortcut(&keymap, &key("s"), keyboard::Modifiers::CTRL);
        assert!(matches!(message, Some(Message::Save)));
    }

    #[test]
    fn test_cmd_o_loads() {
        let keymap = Keymap::default();
        let message = shortcut(&keymap, &key("o"), keyboard::Modifiers::LOGO);
        assert!(matches!(message, Some(Message::Load)));
    }

    #[test]
    fn test_plain_letters_are_not_shortcuts() {
        let keymap = Keymap::default();
        assert!(shortcut(&keymap, &key("s"), keyboard::Modifiers::empty()).is_none());
        assert!(shortcut(&keymap, &key("q"), keyboard::Modifiers::CTRL).is_none());
    }

    #[test]
    fn test_named_keys_are_ignored() {
        let keymap = Keymap::default();
        let enter = keyboard::Key::Named(keyboard::key::Named::Enter);
        assert!(shortcut(&keymap, &enter, keyboard::Modifiers::CTRL).is_none());
    }

    fn focused_press(c: &str, modifiers: keyboard::Modifiers) -> KeyPress {
        KeyPress {
            key: key(c),
            modifiers,
            text: Some(c.into()),
            status: Status::Focused,
        }
    }

    #[test]
    fn test_cmd_s_in_text_area_saves_instead_of_typing() {
        let keymap = Keymap::default();
        let binding = editor_binding(&keymap, focused_press("s", keyboard::Modifiers::LOGO));
        assert!(matches!(binding, Some(Binding::Custom(Message::Save))));
    }

    #[test]
    fn test_ctrl_o_in_text_area_loads() {
        let keymap = Keymap::default();
        let binding = editor_binding(&keymap, focused_press("o", keyboard::Modifiers::CTRL));
        assert!(matches!(binding, Some(Binding::Custom(Message::Load))));
    }

    #[test]
    fn test_plain_typing_still_inserts() {
        let keymap = Keymap::default();
        let binding = editor_binding(&keymap, focused_press("s", keyboard::Modifiers::empty()));
        assert!(matches!(binding, Some(Binding::Insert('s'))));
    }

    #[test]
    fn test_unfocused_text_area_leaves_shortcuts_alone() {
        let keymap = Keymap::default();
        let press = KeyPress {
            status: Status::Active,
            ..focused_press("s", keyboard::Modifiers::LOGO)
        };
        assert!(!matches!(
            editor_binding(&keymap, press),
            Some(Binding::Custom(_))
        ));
    }

    #[test]
    fn test_edit_action_marks_dirty() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('h'),
        )));
        assert!(app.editor.document().is_dirty());
        assert_eq!(app.editor.document().display_name(), "* No file");
        assert_eq!(app.editor.document().text(), "h");
    }

    #[test]
    fn test_cursor_move_keeps_clean() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::EditorAction(text_editor::Action::Move(
            text_editor::Motion::Right,
        )));
        let _ = app.update(Message::EditorAction(text_editor::Action::SelectAll));
        assert!(!app.editor.document().is_dirty());
        assert_eq!(app.editor.document().display_name(), "No file");
    }

    #[test]
    fn test_cancelled_dialogs_change_nothing() {
        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));
        let _ = app.update(Message::SavePathPicked(None));
        let _ = app.update(Message::LoadPathPicked(None));
        assert_eq!(app.editor.document().text(), "x");
        assert!(app.editor.document().path().is_none());
        assert_eq!(app.editor.document().display_name(), "* No file");
    }

    #[test]
    fn test_save_shortcut_after_load_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello
").unwrap();

        let (mut app, _) = App::new(Config::default());
        let _ = app.update(Message::LoadPathPicked(Some(path.clone())));
        assert_eq!(app.editor.document().line_count_label(), "2 L");
        assert_eq!(app.editor.document().display_name(), "a.txt");

        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('!'),
        )));
        let _ = app.update(Message::KeyPressed(key("s"), keyboard::Modifiers::CTRL));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "!hello
");
        assert_eq!(app.editor.document().display_name(), "a.txt");
    }

    #[test]
    fn test_modifier_conversion() {
        let mods = to_core_modifiers(keyboard::Modifiers::CTRL | keyboard::Modifiers::SHIFT);
        assert!(mods.ctrl && mods.shift);
        assert!(!mods.alt && !mods.meta);
    }
}
