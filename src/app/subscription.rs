// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions drive everything time- and gesture-based:
//!
//! - A periodic tick, scheduled only while something can actually change
//!   (a toast is live, a rotator may auto-advance, the chat badge is
//!   pending). When the tick subscription is dropped, every timer dies with
//!   it; nothing survives a screen teardown.
//! - A raw-event listener translating touch gestures into rotator swipe
//!   messages and the Escape key into modal dismissal.

use super::Message;
use crate::ui::rotator;
use iced::{event, keyboard, time, touch, Subscription};
use std::time::Duration;

/// Tick period. Coarse enough to be cheap, fine enough that a 300 ms toast
/// exit transition spans several frames.
const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Creates the periodic tick subscription while anything animated is live.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(TICK_PERIOD).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the raw-event subscription for touch swipes and Escape.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        event::Event::Touch(touch_event) => Some(Message::SwipeGesture(match touch_event {
            touch::Event::FingerPressed { position, .. } => {
                rotator::Message::SwipeStarted(position.x)
            }
            touch::Event::FingerMoved { position, .. } => {
                rotator::Message::SwipeMoved(position.x)
            }
            touch::Event::FingerLifted { position, .. }
            | touch::Event::FingerLost { position, .. } => {
                rotator::Message::SwipeEnded(position.x)
            }
        })),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
