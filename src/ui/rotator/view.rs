// SPDX-License-Identifier: MPL-2.0
//! Frame rendering for rotator instances.
//!
//! The caller supplies the current slide's content; this module wraps it
//! with prev/next controls, indicator dots, and the hover tracking that
//! drives pause-on-hover. Rendering only the current slide is the sliding
//! track: `go_to` repositions the window by swapping the content out.

use super::state::{Message, Rotator};
use crate::ui::design_tokens::{palette, radius, sizing, spacing};
use crate::ui::icons;
use iced::widget::{button, mouse_area, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// What the frame should render around the slide window.
pub struct Frame<'a> {
    /// Content of the current slide.
    pub slide: Element<'a, Message>,
    /// Render prev/next chevron controls.
    pub show_controls: bool,
    /// Render one indicator dot per slide.
    pub show_indicators: bool,
}

/// Renders a rotator frame around the current slide.
///
/// Controls and indicators are omitted automatically when the rotator has
/// fewer than two slides, whatever the frame requests.
pub fn view<'a>(rotator: &Rotator, frame: Frame<'a>) -> Element<'a, Message> {
    let controls = frame.show_controls && rotator.has_controls();
    let indicators = frame.show_indicators && rotator.has_controls();

    let slide_window = Container::new(frame.slide)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SLIDE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut body = Row::new().align_y(alignment::Vertical::Center);
    if controls {
        body = body.push(
            button(icons::chevron_left())
                .on_press(Message::Prev)
                .padding(spacing::XS)
                .style(control_style),
        );
    }
    body = body.push(slide_window);
    if controls {
        body = body.push(
            button(icons::chevron_right())
                .on_press(Message::Next)
                .padding(spacing::XS)
                .style(control_style),
        );
    }

    let mut column = Column::new().push(body);
    if indicators {
        let mut dots = Row::new().spacing(spacing::XS);
        for index in 0..rotator.len() {
            let active = index == rotator.current();
            dots = dots.push(
                button("")
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .on_press(Message::GoTo(index))
                    .style(move |theme, status| indicator_style(theme, status, active)),
            );
        }
        column = column.push(
            Container::new(dots)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::XS),
        );
    }

    mouse_area(column)
        .on_enter(Message::Entered)
        .on_exit(Message::Exited)
        .into()
}

/// Style function for the chevron controls.
fn control_style(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(extended.background.strong.color.into()),
            text_color: extended.background.base.text,
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: iced::Border::default(),
            ..Default::default()
        },
    }
}

/// Style function for the indicator dots.
fn indicator_style(theme: &Theme, _status: button::Status, active: bool) -> button::Style {
    let extended = theme.extended_palette();
    let fill = if active {
        palette::PRIMARY_500
    } else {
        extended.background.strong.color
    };

    button::Style {
        background: Some(fill.into()),
        text_color: extended.background.base.text,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;
    use std::time::Duration;

    fn frame<'a>() -> Frame<'a> {
        Frame {
            slide: text("slide").into(),
            show_controls: true,
            show_indicators: true,
        }
    }

    #[test]
    fn frame_renders_with_controls() {
        let rotator = Rotator::new(3, Duration::from_secs(5));
        let _ = view(&rotator, frame());
    }

    #[test]
    fn frame_renders_for_single_slide() {
        let rotator = Rotator::new(1, Duration::from_secs(5));
        let _ = view(&rotator, frame());
    }

    #[test]
    fn frame_renders_for_empty_rotator() {
        let rotator = Rotator::new(0, Duration::from_secs(5));
        let _ = view(&rotator, frame());
    }
}
