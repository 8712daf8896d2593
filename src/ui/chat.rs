// SPDX-License-Identifier: MPL-2.0
//! Floating chat assistant overlay.
//!
//! A scripted helper available on every screen: keyword-routed canned
//! replies, quick-reply buttons for first contact, and an unread badge that
//! appears a few seconds after startup until the widget is first opened.
//! Replies are picked round-robin within each topic pool, so the script is
//! deterministic.

use crate::content::chat_replies;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use chrono::Local;
use iced::widget::{button, container, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Delay before the unread badge appears on a fresh session.
const BADGE_DELAY: Duration = Duration::from_secs(3);

/// Delay before the scripted agent reply lands.
pub const REPLY_DELAY: Duration = Duration::from_millis(1400);

/// Reply pools the keyword router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Course,
    Learnership,
    Pricing,
    Default,
}

impl Topic {
    fn pool(self) -> &'static [&'static str] {
        match self {
            Topic::Course => chat_replies::COURSE,
            Topic::Learnership => chat_replies::LEARNERSHIP,
            Topic::Pricing => chat_replies::PRICING,
            Topic::Default => chat_replies::DEFAULT,
        }
    }

    fn index(self) -> usize {
        match self {
            Topic::Course => 0,
            Topic::Learnership => 1,
            Topic::Pricing => 2,
            Topic::Default => 3,
        }
    }
}

/// Who authored a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Visitor,
    Agent,
}

/// One line in the chat log.
#[derive(Debug, Clone)]
pub struct ChatLine {
    pub sender: Sender,
    pub body: String,
    /// Wall-clock time label, e.g. "14:05".
    pub time: String,
}

/// Messages emitted by the chat widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    InputChanged(String),
    Send,
    QuickReply(usize),
    /// The delayed scripted reply arrived.
    AgentReplied(String),
}

/// A scripted reply the parent should deliver after [`REPLY_DELAY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub body: String,
}

/// Chat widget state.
#[derive(Debug)]
pub struct State {
    open: bool,
    input: String,
    log: Vec<ChatLine>,
    quick_replies_visible: bool,
    badge_visible: bool,
    badge_due: Option<Instant>,
    /// Round-robin cursor per reply pool.
    cursors: [usize; 4],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            input: String::new(),
            log: Vec::new(),
            quick_replies_visible: true,
            badge_visible: false,
            badge_due: Some(Instant::now() + BADGE_DELAY),
            cursors: [0; 4],
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn log(&self) -> &[ChatLine] {
        &self.log
    }

    #[must_use]
    pub fn badge_visible(&self) -> bool {
        self.badge_visible
    }

    /// Whether the periodic tick still has chat work to do.
    #[must_use]
    pub fn awaiting_badge(&self) -> bool {
        self.badge_due.is_some()
    }

    /// Shows the unread badge once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(due) = self.badge_due {
            if now >= due {
                self.badge_visible = true;
                self.badge_due = None;
            }
        }
    }

    /// Handles a chat message. Returns a reply for the parent to schedule
    /// after [`REPLY_DELAY`], when the visitor said something.
    pub fn update(&mut self, message: Message) -> Option<PendingReply> {
        match message {
            Message::Toggle => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
                None
            }
            Message::Close => {
                self.close();
                None
            }
            Message::InputChanged(value) => {
                self.input = value;
                None
            }
            Message::Send => {
                let body = self.input.trim().to_string();
                if body.is_empty() {
                    return None;
                }
                self.input.clear();
                Some(self.send_visitor_line(body))
            }
            Message::QuickReply(index) => {
                let body = chat_replies::QUICK_REPLIES.get(index)?.to_string();
                self.quick_replies_visible = false;
                Some(self.send_visitor_line(body))
            }
            Message::AgentReplied(body) => {
                self.push_line(Sender::Agent, body);
                None
            }
        }
    }

    fn open(&mut self) {
        self.open = true;
        self.badge_visible = false;
        self.badge_due = None;
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn send_visitor_line(&mut self, body: String) -> PendingReply {
        self.quick_replies_visible = false;
        let reply = self.scripted_reply(&body);
        self.push_line(Sender::Visitor, body);
        PendingReply { body: reply }
    }

    fn push_line(&mut self, sender: Sender, body: String) {
        self.log.push(ChatLine {
            sender,
            body,
            time: Local::now().format("%H:%M").to_string(),
        });
    }

    /// Picks the next scripted reply for the visitor's message.
    fn scripted_reply(&mut self, visitor_message: &str) -> String {
        let topic = route(visitor_message);
        let pool = topic.pool();
        let cursor = &mut self.cursors[topic.index()];
        let reply = pool[*cursor % pool.len()];
        *cursor += 1;
        reply.to_string()
    }
}

/// Routes a visitor message to a reply pool by keyword.
fn route(message: &str) -> Topic {
    let lower = message.to_lowercase();
    if lower.contains("course") || lower.contains("training") || lower.contains("program") {
        Topic::Course
    } else if lower.contains("learnership") || lower.contains("apply") {
        Topic::Learnership
    } else if lower.contains("price") || lower.contains("cost") || lower.contains("fee") {
        Topic::Pricing
    } else {
        Topic::Default
    }
}

/// Renders the floating chat overlay (button or window), bottom-right.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = if state.open {
        window(state, i18n)
    } else {
        launcher(state, i18n)
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// The collapsed chat button, with the unread badge when due.
fn launcher<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(alignment::Vertical::Center);
    if state.badge_visible {
        row = row.push(
            Text::new(i18n.tr("chat-badge"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }
    row = row.push(icons::chat_bubble());

    button(row)
        .on_press(Message::Toggle)
        .padding(spacing::SM)
        .style(styles::button::primary)
        .into()
}

/// The expanded chat window.
fn window<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(i18n.tr("chat-title")).size(typography::TITLE_SM),
            )
            .width(Length::Fill),
        )
        .push(
            button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::plain),
        );

    let mut log_column = Column::new().spacing(spacing::XS).padding(spacing::XS);
    if state.log.is_empty() {
        log_column = log_column.push(
            Text::new(i18n.tr("chat-greeting")).size(typography::BODY),
        );
    }
    for line in &state.log {
        log_column = log_column.push(chat_line(line));
    }

    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(
            Container::new(scrollable(log_column).height(Length::Fill))
                .height(Length::Fill),
        );

    if state.quick_replies_visible {
        let mut quick = Column::new().spacing(spacing::XXS);
        for (index, reply) in chat_replies::QUICK_REPLIES.iter().enumerate() {
            quick = quick.push(
                button(Text::new(*reply).size(typography::BODY))
                    .on_press(Message::QuickReply(index))
                    .padding([spacing::XXS, spacing::XS])
                    .style(|theme: &Theme, status| {
                        styles::button::chip(theme, status, false)
                    }),
            );
        }
        body = body.push(quick);
    }

    let input_row = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("chat-input-placeholder"), &state.input)
                .on_input(Message::InputChanged)
                .on_submit(Message::Send)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(i18n.tr("chat-send")))
                .on_press(Message::Send)
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::primary),
        );
    body = body.push(input_row);

    Container::new(body)
        .width(Length::Fixed(sizing::CHAT_WIDTH))
        .height(Length::Fixed(sizing::CHAT_HEIGHT))
        .padding(spacing::SM)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            shadow: shadow::LG,
            ..Default::default()
        })
        .into()
}

/// Renders one chat line, visitor lines accented.
fn chat_line(line: &ChatLine) -> Element<'_, Message> {
    let accent = match line.sender {
        Sender::Visitor => palette::PRIMARY_400,
        Sender::Agent => palette::GRAY_400,
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(line.body.as_str()).size(typography::BODY))
        .push(
            Text::new(line.time.as_str())
                .size(typography::CAPTION)
                .color(accent),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_appears_after_delay_until_opened() {
        let mut state = State::new();
        assert!(!state.badge_visible());

        let due = state.badge_due.expect("badge should be pending");
        state.tick(due - Duration::from_millis(1));
        assert!(!state.badge_visible());

        state.tick(due);
        assert!(state.badge_visible());

        state.update(Message::Toggle);
        assert!(state.is_open());
        assert!(!state.badge_visible());
    }

    #[test]
    fn opening_cancels_pending_badge() {
        let mut state = State::new();
        state.update(Message::Toggle);
        assert!(!state.awaiting_badge());

        // Even a late tick shows no badge
        state.tick(Instant::now() + Duration::from_secs(60));
        assert!(!state.badge_visible());
    }

    #[test]
    fn send_records_line_and_requests_reply() {
        let mut state = State::new();
        state.update(Message::InputChanged("What are your prices?".into()));
        let reply = state.update(Message::Send).expect("should request a reply");

        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log()[0].sender, Sender::Visitor);
        assert!(chat_replies::PRICING.contains(&reply.body.as_str()));
    }

    #[test]
    fn empty_input_sends_nothing() {
        let mut state = State::new();
        state.update(Message::InputChanged("   ".into()));
        assert!(state.update(Message::Send).is_none());
        assert!(state.log().is_empty());
    }

    #[test]
    fn quick_reply_hides_the_quick_reply_row() {
        let mut state = State::new();
        assert!(state.quick_replies_visible);

        let reply = state
            .update(Message::QuickReply(0))
            .expect("quick reply should request a reply");
        assert!(!state.quick_replies_visible);
        assert!(chat_replies::COURSE.contains(&reply.body.as_str()));
    }

    #[test]
    fn agent_reply_lands_in_log() {
        let mut state = State::new();
        state.update(Message::AgentReplied("Welcome!".into()));
        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log()[0].sender, Sender::Agent);
    }

    #[test]
    fn replies_rotate_round_robin_within_a_pool() {
        let mut state = State::new();
        let first = state.send_visitor_line("course info please".into());
        let second = state.send_visitor_line("more course info".into());
        assert_ne!(first, second);

        // Wraps back to the first reply once the pool is exhausted
        let mut last = second;
        for _ in 0..chat_replies::COURSE.len() - 1 {
            last = state.send_visitor_line("course again".into());
        }
        assert_eq!(last, first);
    }

    #[test]
    fn routing_matches_keywords() {
        assert_eq!(route("Tell me about a COURSE"), Topic::Course);
        assert_eq!(route("how to apply?"), Topic::Learnership);
        assert_eq!(route("what does it cost"), Topic::Pricing);
        assert_eq!(route("hello there"), Topic::Default);
    }

    #[test]
    fn view_renders_open_and_closed() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = view(&state, &i18n);
        state.update(Message::Toggle);
        let _ = view(&state, &i18n);
    }
}
