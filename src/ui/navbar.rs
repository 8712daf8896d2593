// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! A brand mark, one link per screen, and a hamburger menu mirroring the
//! same links in a dropdown. The menu closes itself whenever a link is
//! chosen, and clicking the link of the current screen is a no-op.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *menu_open = false;
            Event::Navigate(screen)
        }
    }
}

/// Screens reachable from the navbar, in display order.
const LINKS: [Screen; 6] = [
    Screen::Home,
    Screen::Courses,
    Screen::Schedule,
    Screen::Resources,
    Screen::Insights,
    Screen::Login,
];

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// The i18n key for a screen's navigation label.
fn link_key(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "nav-home",
        Screen::Courses => "nav-courses",
        Screen::Schedule => "nav-schedule",
        Screen::Resources => "nav-resources",
        Screen::Insights => "nav-insights",
        Screen::Login => "nav-login",
        Screen::Signup => "nav-signup",
    }
}

/// Build the top bar: brand, links, hamburger.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("app-brand"))
        .size(typography::TITLE_MD)
        .color(palette::PRIMARY_400);

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for screen in LINKS {
        let label = Text::new(ctx.i18n.tr(link_key(screen)));
        let selected = screen == ctx.current
            || (screen == Screen::Login && ctx.current == Screen::Signup);
        let link = if selected {
            button(label).style(|theme: &Theme, status| {
                let mut style = styles::button::plain(theme, status);
                style.text_color = palette::PRIMARY_400;
                style
            })
        } else {
            button(label)
                .on_press(Message::Navigate(screen))
                .style(styles::button::plain)
        };
        links = links.push(link.padding([spacing::XXS, spacing::XS]));
    }

    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::plain);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(links).width(Length::Fill).align_x(Horizontal::Right))
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu mirroring the navigation links.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);
    for screen in LINKS {
        menu_column = menu_column.push(
            button(Text::new(ctx.i18n.tr(link_key(screen))))
                .on_press(Message::Navigate(screen))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::plain),
        );
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}
