// SPDX-License-Identifier: MPL-2.0
//! Text input style functions, including validation highlighting.

use crate::ui::design_tokens::{border, palette, radius};
use crate::validation::FieldStatus;
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Styles an input according to its validation state: red border when
/// invalid, green when validated, theme default otherwise.
pub fn validated(field: FieldStatus) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let extended = theme.extended_palette();

        let border_color = match field {
            FieldStatus::Invalid => palette::ERROR_500,
            FieldStatus::Valid => palette::SUCCESS_500,
            FieldStatus::Neutral => match status {
                Status::Focused { .. } => extended.primary.strong.color,
                _ => extended.background.strong.color,
            },
        };
        let border_width = match field {
            FieldStatus::Neutral => border::WIDTH_SM,
            _ => border::WIDTH_MD,
        };

        Style {
            background: extended.background.base.color.into(),
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            icon: extended.background.weak.text,
            placeholder: extended.background.strong.color,
            value: extended.background.base.text,
            selection: extended.primary.weak.color,
        }
    }
}
