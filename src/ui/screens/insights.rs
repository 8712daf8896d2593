// SPDX-License-Identifier: MPL-2.0
//! Insights screen: category filter, spotlight rotator and press ticker.

use super::{section_title, Event};
use crate::content::{self, InsightCategory, PressItem, SpotlightItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::rotator::{self, Rotator};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Auto-advance interval for the spotlight slider.
const SPOTLIGHT_INTERVAL: Duration = Duration::from_secs(7);

/// Auto-advance interval for the press ticker.
const TICKER_INTERVAL: Duration = Duration::from_secs(6);

/// Messages emitted by the insights screen.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Option<InsightCategory>),
    Spotlight(rotator::Message),
    Ticker(rotator::Message),
}

/// Insights screen state.
#[derive(Debug)]
pub struct State {
    filter: Option<InsightCategory>,
    spotlight: Rotator,
    ticker: Rotator,
}

impl State {
    #[must_use]
    pub fn new(config: &crate::config::RotatorConfig) -> Self {
        Self {
            filter: None,
            spotlight: Rotator::configured(
                content::spotlight_items().len(),
                SPOTLIGHT_INTERVAL,
                config,
            ),
            ticker: Rotator::configured(content::press_items().len(), TICKER_INTERVAL, config),
        }
    }

    /// Advances both rotators from the periodic tick.
    pub fn tick(&mut self, now: Instant) {
        self.spotlight.tick(now);
        self.ticker.tick(now);
    }

    /// Whether any rotator on this screen may need the tick subscription.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.spotlight.next_advance_at().is_some() || self.ticker.next_advance_at().is_some()
    }

    /// Routes raw touch gestures to the spotlight slider.
    pub fn swipe(&mut self, message: rotator::Message) {
        self.spotlight.update(message);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
            }
            Message::Spotlight(msg) => self.spotlight.update(msg),
            Message::Ticker(msg) => self.ticker.update(msg),
        }
        Event::None
    }

    /// Spotlight items matching the active filter chip.
    fn filtered_items(&self) -> Vec<&'static SpotlightItem> {
        content::spotlight_items()
            .iter()
            .filter(|item| self.filter.is_none_or(|category| item.category == category))
            .collect()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let spotlight = rotator::view(
            &self.spotlight,
            rotator::Frame {
                slide: spotlight_slide(i18n, content::spotlight_items(), self.spotlight.current()),
                show_controls: true,
                show_indicators: false,
            },
        )
        .map(Message::Spotlight);

        // The ticker is a single-visible rotator with no manual controls
        let ticker = rotator::view(
            &self.ticker,
            rotator::Frame {
                slide: ticker_slide(content::press_items(), self.ticker.current()),
                show_controls: false,
                show_indicators: false,
            },
        )
        .map(Message::Ticker);

        let mut chips = Row::new().spacing(spacing::XS);
        chips = chips.push(chip(
            i18n.tr("filter-all"),
            self.filter.is_none(),
            Message::FilterSelected(None),
        ));
        for category in InsightCategory::ALL {
            chips = chips.push(chip(
                i18n.tr(category.message_key()),
                self.filter == Some(category),
                Message::FilterSelected(Some(category)),
            ));
        }

        let mut cards = Column::new().spacing(spacing::SM);
        for item in self.filtered_items() {
            cards = cards.push(insight_card(i18n, item));
        }

        let body = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(section_title(i18n.tr("insights-spotlight-title")))
            .push(spotlight)
            .push(section_title(i18n.tr("insights-press-title")))
            .push(ticker)
            .push(section_title(i18n.tr("insights-all-title")))
            .push(chips)
            .push(cards);

        scrollable(body).into()
    }
}

/// Renders one filter chip.
fn chip<'a>(label: String, selected: bool, on_press: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| styles::button::chip(theme, status, selected))
        .into()
}

/// Renders the current spotlight slide.
fn spotlight_slide<'a>(
    i18n: &'a I18n,
    items: &'a [SpotlightItem],
    index: usize,
) -> Element<'a, rotator::Message> {
    let Some(item) = items.get(index) else {
        return Text::new("").into();
    };

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(item.category.message_key()))
                .size(typography::CAPTION)
                .color(palette::PRIMARY_400),
        )
        .push(Text::new(item.title).size(typography::TITLE_MD))
        .push(Text::new(item.summary).size(typography::BODY))
        .into()
}

/// Renders the current press ticker item.
fn ticker_slide<'a>(items: &'a [PressItem], index: usize) -> Element<'a, rotator::Message> {
    let Some(item) = items.get(index) else {
        return Text::new("").into();
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(item.outlet)
                .size(typography::BODY)
                .color(palette::PRIMARY_400),
        )
        .push(Text::new(item.headline).size(typography::BODY))
        .into()
}

/// Renders one insight card in the filtered grid.
fn insight_card<'a>(i18n: &'a I18n, item: &'static SpotlightItem) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr(item.category.message_key()))
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_400),
            )
            .push(Text::new(item.title).size(typography::TITLE_SM))
            .push(Text::new(item.summary).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotatorConfig;

    fn state() -> State {
        State::new(&RotatorConfig::default())
    }

    #[test]
    fn filter_narrows_cards() {
        let mut state = state();
        let all = state.filtered_items().len();

        state.update(Message::FilterSelected(Some(InsightCategory::Learning)));
        let learning = state.filtered_items();
        assert!(!learning.is_empty());
        assert!(learning.len() < all);
        assert!(learning
            .iter()
            .all(|i| i.category == InsightCategory::Learning));
    }

    #[test]
    fn both_rotators_tick_independently() {
        let mut state = state();
        let spotlight_deadline = state.spotlight.next_advance_at().unwrap();
        let ticker_deadline = state.ticker.next_advance_at().unwrap();

        // The ticker fires first (6s vs 7s)
        state.tick(ticker_deadline);
        assert_eq!(state.ticker.current(), 1);
        assert_eq!(state.spotlight.current(), 0);

        state.tick(spotlight_deadline);
        assert_eq!(state.spotlight.current(), 1);
    }

    #[test]
    fn hover_pauses_only_the_hovered_rotator() {
        let mut state = state();
        state.update(Message::Ticker(rotator::Message::Entered));

        assert!(state.ticker.is_paused());
        assert!(!state.spotlight.is_paused());
        assert!(state.needs_tick(), "spotlight still needs the tick");
    }

    #[test]
    fn autoplay_off_means_no_tick_needed() {
        let config = RotatorConfig {
            autoplay: Some(false),
            pause_on_hover: Some(true),
        };
        let state = State::new(&config);
        assert!(!state.needs_tick());
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _ = state.view(&i18n);
    }
}
