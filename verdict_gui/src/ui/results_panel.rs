//! Results Panel (Bottom)
//!
//! Shows the verdict card while the controller holds a visible panel:
//! - Exit transition in progress -> card fading and dropping
//! - Verdict visible -> result_verdict with its entrance animations
//! - Hidden -> nothing

use std::time::Duration;

use iced::widget::{container, Space};
use iced::{Element, Length, Padding};

use verdict_core::animation::{self, Frame};

use crate::{App, Message};
use super::result_verdict;

/// Render the results panel based on the controller's panel state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let Some(view) = app.controller.panel().view() else {
        return Space::new().height(0).into();
    };

    let exit = app
        .exit_elapsed()
        .map(animation::exit_frame)
        .unwrap_or(Frame::SHOWN);

    // Without a start time the entrance is treated as finished
    let since_shown = app.entrance_elapsed().unwrap_or(Duration::MAX);

    container(result_verdict::view(view, exit.opacity, since_shown))
        .padding(Padding {
            top: exit.offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .width(Length::Fill)
        .into()
}
