// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are rendered as text glyphs so the crate ships no binary assets and
//! needs no rasterization step. Each icon is a styled [`Text`] widget; color
//! defaults to the theme text color unless a tint is requested.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_dialog`).

use crate::ui::design_tokens::sizing;
use iced::widget::{text, Text};
use iced::Color;

/// Macro to define an icon constructor for a fixed glyph.
macro_rules! define_icon {
    ($name:ident, $glyph:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Text<'a> {
            text($glyph).size(sizing::ICON_MD)
        }
    };
}

define_icon!(checkmark, "✓", "Check mark: operation succeeded.");
define_icon!(cross, "✕", "Cross: close or dismiss.");
define_icon!(warning, "⚠", "Warning triangle.");
define_icon!(exclamation, "!", "Exclamation mark: error accent.");
define_icon!(info, "ℹ", "Information mark.");
define_icon!(chevron_left, "‹", "Chevron pointing left.");
define_icon!(chevron_right, "›", "Chevron pointing right.");
define_icon!(menu, "☰", "Hamburger menu bars.");
define_icon!(chat_bubble, "💬", "Chat bubble.");
define_icon!(download, "⤓", "Download arrow.");
define_icon!(calendar, "▦", "Calendar grid.");
define_icon!(search, "🔍", "Magnifying glass.");

/// Resizes an icon glyph to the given size.
#[must_use]
pub fn sized(icon: Text<'_>, size: f32) -> Text<'_> {
    icon.size(size)
}

/// Tints an icon glyph with a fixed color.
#[must_use]
pub fn tinted(icon: Text<'_>, color: Color) -> Text<'_> {
    icon.color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn icons_construct_without_panicking() {
        let _ = checkmark();
        let _ = cross();
        let _ = warning();
        let _ = info();
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = menu();
        let _ = chat_bubble();
        let _ = download();
    }

    #[test]
    fn sized_and_tinted_compose() {
        let _ = tinted(sized(checkmark(), 12.0), palette::SUCCESS_500);
    }
}
