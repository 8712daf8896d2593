// SPDX-License-Identifier: MPL-2.0
//! Container style functions.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container::Style;
use iced::{Border, Color, Theme};

/// Content card with a subtle border and shadow.
pub fn card(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> Style {
    Style {
        background: Some(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}

/// The modal dialog card itself.
pub fn modal_card(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Top toolbar strip (navbar background).
pub fn toolbar(theme: &Theme) -> Style {
    let extended = theme.extended_palette();

    Style {
        background: Some(extended.background.weak.color.into()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = modal_backdrop(&Theme::Dark);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            other => panic!("expected color background, got {:?}", other),
        }
    }

    #[test]
    fn modal_card_has_visible_background() {
        let style = modal_card(&Theme::Light);
        assert!(style.background.is_some());
    }
}
