//! Status Bar (Bottom)
//!
//! Displays:
//! - Classifier endpoint
//! - Time of the last rendered verdict
//! - Status messages

use chrono::{DateTime, Local};
use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    endpoint: &'a str,
    last_verdict_at: Option<DateTime<Local>>,
    status: &'a str,
) -> Element<'a, Message> {
    let last_info = match last_verdict_at {
        Some(at) => format!("  Last verdict: {}", at.format("%H:%M:%S")),
        None => String::new(),
    };

    row![
        text(endpoint).size(10),
        text(last_info).size(10).color([0.4, 0.4, 0.4]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
