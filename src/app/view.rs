// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen renders under the navbar; the chat overlay and toast
//! overlay stack above it, toasts topmost.

use super::{App, Message, Screen};
use crate::ui::chat;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Toast;
use crate::ui::screens::auth;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

impl App {
    /// Renders the application: navbar, active screen, overlays.
    pub fn view(&self) -> Element<'_, Message> {
        let navbar_view = navbar::view(NavbarViewContext {
            i18n: &self.i18n,
            current: self.screen,
            menu_open: self.menu_open,
        })
        .map(Message::Navbar);

        let screen_view: Element<'_, Message> = match self.screen {
            Screen::Home => self.home.view(&self.i18n).map(Message::Home),
            Screen::Courses => self.courses.view(&self.i18n).map(Message::Courses),
            Screen::Schedule => self.schedule.view(&self.i18n).map(Message::Schedule),
            Screen::Resources => self.resources.view(&self.i18n).map(Message::Resources),
            Screen::Insights => self.insights.view(&self.i18n).map(Message::Insights),
            Screen::Login => self.auth.view(auth::Mode::Login, &self.i18n).map(Message::Auth),
            Screen::Signup => self
                .auth
                .view(auth::Mode::Signup, &self.i18n)
                .map(Message::Auth),
        };

        let base = Column::new()
            .push(navbar_view)
            .push(
                Container::new(screen_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill);

        let chat_overlay = chat::view(&self.chat, &self.i18n).map(Message::Chat);

        let toast_overlay = Toast::view_overlay(
            &self.notifications,
            &self.i18n,
            self.toast_position,
            Instant::now(),
        )
        .map(Message::Notification);

        Stack::new()
            .push(base)
            .push(chat_overlay)
            .push(toast_overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
