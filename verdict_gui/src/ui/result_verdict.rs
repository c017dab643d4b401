//! Results view for a classification verdict
//!
//! Shows:
//! - Verdict icon and label, styled by risk level
//! - Confidence percentage and animated fill bar
//! - Reasons, fading in one after another
//! - Reassuring signals (when present)
//! - Flagged words as tags (region hidden when empty)

use std::time::Duration;

use iced::widget::{column, container, progress_bar, row, text, Column, Row, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme};

use verdict_core::animation;
use verdict_core::VerdictView;

use crate::Message;

/// Tags per row in the flagged words region
const TAGS_PER_ROW: usize = 5;

fn with_alpha(rgb: [f32; 3], alpha: f32) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], alpha)
}

/// Render the verdict card.
///
/// `opacity` comes from the exit transition; `since_shown` drives the
/// entrance animations.
pub fn view(view: &VerdictView, opacity: f32, since_shown: Duration) -> Element<'_, Message> {
    let accent = view.level.accent_rgb();
    let muted = [0.5, 0.5, 0.5];

    let heading = row![
        text(view.icon()).size(34),
        column![
            text(view.label.as_str()).size(22).color(with_alpha(accent, opacity)),
            text("Risk level").size(11).color(with_alpha(muted, opacity)),
        ]
        .spacing(2),
        Space::new().width(Length::Fill),
        column![
            text(view.confidence_text()).size(22).color(with_alpha(accent, opacity)),
            text("Confidence").size(11).color(with_alpha(muted, opacity)),
        ]
        .align_x(Alignment::End)
        .spacing(2),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let fill = animation::bar_fill(view.bar_target(), since_shown) * 100.0;
    let bar = progress_bar(0.0..=100.0, fill).style(move |_theme: &Theme| progress_bar::Style {
        background: Background::Color(with_alpha(muted, 0.2 * opacity)),
        bar: Background::Color(with_alpha(accent, opacity)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
    });

    let mut card: Column<'_, Message> = column![heading, Space::new().height(10), bar];

    if !view.reasons.is_empty() {
        card = card
            .push(Space::new().height(14))
            .push(text("Why this verdict").size(14).color(with_alpha(muted, opacity)));

        for (index, line) in view.reasons.iter().enumerate() {
            let frame = animation::reason_frame(index, since_shown);
            let alpha = frame.opacity * opacity;
            let entry = row![
                text("•").size(12).color(with_alpha(accent, alpha)),
                text(line.text.as_str()).size(12).color(with_alpha([0.45, 0.45, 0.45], alpha)),
            ]
            .spacing(6);

            // offset runs from -10 to 0 px; shift the indent to slide in
            card = card.push(container(entry).padding(Padding {
                top: 2.0,
                right: 0.0,
                bottom: 2.0,
                left: -animation::REASON_SLIDE + frame.offset,
            }));
        }
    }

    if view.safe_signals_visible() {
        let signal_color = with_alpha([0.13, 0.65, 0.42], opacity);
        card = card
            .push(Space::new().height(14))
            .push(text("Reassuring signals").size(14).color(with_alpha(muted, opacity)));
        for signal in &view.safe_signals {
            card = card.push(
                row![
                    text("✓").size(12).color(signal_color),
                    text(signal.as_str()).size(12).color(signal_color),
                ]
                .spacing(6)
                .padding(Padding::from([2, 10])),
            );
        }
    }

    if view.highlights_visible() {
        card = card
            .push(Space::new().height(14))
            .push(text("Flagged words").size(14).color(with_alpha(muted, opacity)))
            .push(Space::new().height(6))
            .push(view_tags(&view.highlighted_words, accent, opacity));
    }

    container(card)
        .padding(16)
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            text_color: None,
            background: Some(Background::Color(with_alpha(accent, 0.06 * opacity))),
            border: Border {
                color: with_alpha(accent, 0.6 * opacity),
                width: 1.5,
                radius: 8.0.into(),
            },
            shadow: iced::Shadow::default(),
            snap: false,
        })
        .into()
}

/// Flagged words as rounded tags, in input order
fn view_tags(words: &[String], accent: [f32; 3], opacity: f32) -> Column<'_, Message> {
    let mut rows: Column<'_, Message> = column![].spacing(6);

    for chunk in words.chunks(TAGS_PER_ROW) {
        let mut tags: Row<'_, Message> = row![].spacing(6);
        for word in chunk {
            let tag = container(text(word.as_str()).size(11).color(with_alpha(accent, opacity)))
                .padding(Padding::from([3, 10]))
                .style(move |_theme: &Theme| container::Style {
                    text_color: None,
                    background: Some(Background::Color(with_alpha(accent, 0.15 * opacity))),
                    border: Border {
                        color: with_alpha(accent, 0.5 * opacity),
                        width: 1.0,
                        radius: 10.0.into(),
                    },
                    shadow: iced::Shadow::default(),
                    snap: false,
                });
            tags = tags.push(tag);
        }
        rows = rows.push(tags);
    }

    rows
}
