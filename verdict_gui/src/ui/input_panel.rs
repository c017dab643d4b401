//! Input Panel (Top)
//!
//! Multi-line message editor plus the analyze trigger. The editor shakes
//! sideways when an empty message is submitted; the trigger shows a spinner
//! and the busy label while a submission is running.

use iced::widget::{button, column, container, row, text, text_editor, Space};
use iced::{Alignment, Element, Length, Padding};

use verdict_core::animation::{self, SHAKE_AMPLITUDE};

use crate::{App, Message};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_STEP_MS: u128 = 80;

/// Render the message editor and trigger button
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let shake = app
        .shake_elapsed()
        .map(animation::shake_offset)
        .unwrap_or(0.0);

    let editor = text_editor(&app.editor)
        .placeholder("Paste an SMS, WhatsApp message or call transcript...")
        .on_action(Message::EditorAction)
        .height(Length::Fixed(140.0))
        .padding(10);

    // Horizontal padding is traded from one side to the other to move the box
    let editor_wrapper = container(editor).padding(Padding {
        top: 0.0,
        right: SHAKE_AMPLITUDE - shake,
        bottom: 0.0,
        left: SHAKE_AMPLITUDE + shake,
    });

    let label = text(app.controller.trigger_label()).size(13);
    let trigger_content = if app.controller.is_busy() {
        let elapsed = app.now.saturating_duration_since(app.booted_at).as_millis();
        let frame = SPINNER[(elapsed / SPINNER_STEP_MS) as usize % SPINNER.len()];
        row![text(frame).size(13), label]
    } else {
        row![label]
    };

    let trigger = button(
        container(trigger_content.spacing(8).align_y(Alignment::Center))
            .center_x(Length::Fill),
    )
    .on_press_maybe(app.controller.trigger_enabled().then_some(Message::Analyze))
    .padding(Padding::from([10, 20]))
    .width(Length::Fill)
    .style(button::primary);

    let panel = column![
        text("Message").size(14),
        Space::new().height(6),
        editor_wrapper,
        Space::new().height(10),
        container(trigger).padding(Padding::from([0, SHAKE_AMPLITUDE as u16])),
    ];

    container(panel)
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(12)
        .into()
}
