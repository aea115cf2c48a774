use iced::alignment::Horizontal;
use iced::widget::{button, column, container, row, text, text_editor};
use iced::{Element, Length, Padding};

use crate::app::{update, App, Message};
use crate::theme::{self, colors};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        column![
            self.view_toolbar(),
            self.view_text_area(),
            self.view_status_bar(),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn view_toolbar(&self) -> Element<'_, Message> {
        let document = self.editor.document();

        let filename = text(document.display_name())
            .size(13)
            .color(colors::TEXT_PRIMARY)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let toolbar = row![
            button(text("Save").size(13))
                .padding(Padding::from([4, 12]))
                .style(theme::toolbar_button)
                .on_press(Message::Save),
            button(text("Load").size(13))
                .padding(Padding::from([4, 12]))
                .style(theme::toolbar_button)
                .on_press(Message::Load),
            filename,
        ]
        .spacing(6)
        .padding(Padding::from([6, 8]))
        .align_y(iced::Alignment::Center);

        container(toolbar)
            .width(Length::Fill)
            .height(44)
            .style(theme::bar)
            .into()
    }

    pub fn view_text_area(&self) -> Element<'_, Message> {
        let wrapping = if self.config.editor.word_wrap {
            text::Wrapping::Word
        } else {
            text::Wrapping::None
        };

        // The editor scrolls itself vertically and keeps the caret in view;
        // wrapped lines never need horizontal scrolling.
        let editor = text_editor(&self.editor.document().store().content)
            .on_action(Message::EditorAction)
            .key_binding(|key_press| update::editor_binding(&self.keymap, key_press))
            .size(self.config.editor.font_size)
            .padding(Padding::from([8, 12]))
            .height(Length::Fill)
            .wrapping(wrapping)
            .style(theme::text_area);

        container(editor)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let line_count = text(self.editor.document().line_count_label())
            .size(12)
            .color(colors::TEXT_SECONDARY);

        container(line_count)
            .width(Length::Fill)
            .height(28)
            .align_x(Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(theme::bar)
            .into()
    }
}
