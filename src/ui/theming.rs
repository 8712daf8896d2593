// SPDX-License-Identifier: MPL-2.0
//! Application theme mode selection.

use iced::Theme;

/// Theme mode requested by the user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the platform preference. Without a detection backend this
    /// resolves to the dark theme.
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode into a concrete Iced theme.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_mode_resolves_to_light_theme() {
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
    }

    #[test]
    fn dark_and_system_resolve_to_dark_theme() {
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
        assert_eq!(ThemeMode::System.resolve(), Theme::Dark);
    }
}
