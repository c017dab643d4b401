//! Header with the application title and theme toggle.

use iced::widget::{button, column, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let title = column![
        text("Verdict").size(28),
        text("Check a message for scam and fraud risk").size(12).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    row![
        title,
        Space::new().width(Length::Fill),
        button(text(theme_label).size(11))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center)
    .into()
}
