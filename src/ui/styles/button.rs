// SPDX-License-Identifier: MPL-2.0
//! Button style functions.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button::{Status, Style};
use iced::{Border, Color, Theme};

/// Primary call-to-action button.
pub fn primary(_theme: &Theme, status: Status) -> Style {
    let base_color = match status {
        Status::Hovered => palette::PRIMARY_400,
        Status::Pressed => palette::PRIMARY_700,
        Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_500
        },
        Status::Active => palette::PRIMARY_500,
    };

    Style {
        background: Some(base_color.into()),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filter chip; `selected` renders filled, otherwise outlined.
pub fn chip(theme: &Theme, status: Status, selected: bool) -> Style {
    let extended = theme.extended_palette();

    if selected {
        Style {
            background: Some(palette::PRIMARY_500.into()),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    } else {
        let background = match status {
            Status::Hovered => Some(extended.background.strong.color.into()),
            _ => None,
        };
        Style {
            background,
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::FULL.into(),
                width: 1.0,
                color: extended.background.strong.color,
            },
            ..Default::default()
        }
    }
}

/// Borderless text-like button (menu entries, quick replies).
pub fn plain(theme: &Theme, status: Status) -> Style {
    let extended = theme.extended_palette();

    match status {
        Status::Hovered | Status::Pressed => Style {
            background: Some(extended.background.strong.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        Status::Disabled => Style {
            background: None,
            text_color: extended.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
        Status::Active => Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_disabled_is_translucent() {
        let style = primary(&Theme::Dark, Status::Disabled);
        match style.background {
            Some(iced::Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected solid background, got {:?}", other),
        }
    }

    #[test]
    fn selected_chip_is_filled() {
        let style = chip(&Theme::Dark, Status::Active, true);
        assert!(style.background.is_some());
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn unselected_chip_is_outlined() {
        let style = chip(&Theme::Dark, Status::Active, false);
        assert!(style.background.is_none());
        assert_eq!(style.border.width, 1.0);
    }
}
