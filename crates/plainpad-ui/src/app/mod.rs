use iced::{keyboard, window, Size, Subscription, Task};

use plainpad_core::{Action, Config, Editor, Keymap};

pub mod content;
pub mod messages;
pub mod update;
pub mod view;

pub use content::EditorContent;
pub use messages::*;

pub struct App {
    pub editor: Editor<EditorContent>,
    pub keymap: Keymap,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let app = Self {
            editor: Editor::with_store(EditorContent::default()),
            keymap: Keymap::default(),
            config,
        };

        tracing::debug!(
            save = ?app.keymap.bindings_for(Action::Save),
            load = ?app.keymap.bindings_for(Action::Load),
            "shortcuts"
        );

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.config.window.title.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(config: Config) -> iced::Result {
    let window = window::Settings {
        size: Size::new(config.window.width, config.window.height),
        position: window::Position::Centered,
        exit_on_close_request: true,
        ..Default::default()
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window(window)
        .theme(|_| iced::Theme::Dark)
        .run_with(move || App::new(config))
}
