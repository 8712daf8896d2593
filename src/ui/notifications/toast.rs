// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the displayed notification.
//!
//! Toasts are the visual representation of notifications, appearing as a
//! small card with a kind-colored accent border, a glyph icon, and a close
//! control. During the exit transition the card renders faded.

use super::center::{Center, Message};
use super::notification::{Kind, Notification, Phase};
use crate::config::ToastPosition;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        phase: Phase,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();
        let faded = phase == Phase::Leaving;

        // Kind glyph, tinted with the accent color
        let icon_widget = icons::tinted(Self::kind_icon(kind), accent_color);

        // One text row per message line, i18n-resolved with arguments
        let mut message_column = Column::new().spacing(spacing::XXS);
        for line in notification.lines() {
            let resolved = if line.args().is_empty() {
                i18n.tr(line.key())
            } else {
                let args: Vec<(&str, &str)> = line
                    .args()
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(line.key(), &args)
            };
            message_column = message_column.push(
                Text::new(resolved)
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }

        // Close control
        let notification_id = notification.id();
        let dismiss_button = button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message lines] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, faded))
            .into()
    }

    /// Renders the toast overlay anchored to the configured window corner.
    pub fn view_overlay<'a>(
        center: &'a Center,
        i18n: &'a I18n,
        position: ToastPosition,
        now: Instant,
    ) -> Element<'a, Message> {
        let Some(notification) = center.current() else {
            // Empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let phase = notification.phase_at(now);
        if phase == Phase::Gone {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (align_x, align_y) = match position {
            ToastPosition::TopRight => {
                (alignment::Horizontal::Right, alignment::Vertical::Top)
            }
            ToastPosition::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
            ToastPosition::BottomRight => {
                (alignment::Horizontal::Right, alignment::Vertical::Bottom)
            }
            ToastPosition::BottomLeft => {
                (alignment::Horizontal::Left, alignment::Vertical::Bottom)
            }
        };

        Container::new(Self::view(notification, phase, i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(align_x)
            .align_y(align_y)
            .padding(spacing::MD)
            .into()
    }

    /// Returns the appropriate glyph for the kind.
    fn kind_icon<'a>(kind: Kind) -> Text<'a> {
        match kind {
            Kind::Success => icons::checkmark(),
            Kind::Info => icons::info(),
            Kind::Warning => icons::warning(),
            Kind::Error => icons::exclamation(),
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, faded: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let alpha = if faded { opacity::TOAST_LEAVING } else { 1.0 };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: bg_color.a * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    use crate::ui::design_tokens::palette;

    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, false);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_toast_fades_the_accent() {
        let theme = Theme::Dark;
        let accent = palette::ERROR_500;
        let style = toast_container_style(&theme, accent, true);

        assert!(style.border.color.a < accent.a);
    }

    #[test]
    fn kind_icons_are_defined() {
        let _ = Toast::kind_icon(Kind::Success);
        let _ = Toast::kind_icon(Kind::Info);
        let _ = Toast::kind_icon(Kind::Warning);
        let _ = Toast::kind_icon(Kind::Error);
    }

    #[test]
    fn overlay_renders_for_empty_center() {
        let center = Center::new();
        let i18n = I18n::default();
        let _ = Toast::view_overlay(&center, &i18n, ToastPosition::TopRight, Instant::now());
    }
}
