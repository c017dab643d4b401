//! Modal dialog component
//!
//! Blocking notice shown when a classification fails. The rest of the
//! window stays covered by the backdrop until the notice is dismissed.

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::DismissNotice)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the notice dialog
pub fn view_notice(notice: &str) -> Element<'_, Message> {
    let title = text("Connection Problem").size(18);

    let description = text(notice).size(12);

    let ok_btn = button(text("OK").size(11))
        .on_press(Message::DismissNotice)
        .padding(Padding::from([6, 16]))
        .style(button::primary);

    let content = column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(20),
        container(ok_btn)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .width(Length::Fixed(360.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
