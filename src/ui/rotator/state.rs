// SPDX-License-Identifier: MPL-2.0
//! The rotator state machine.
//!
//! Exactly one slide is current at all times; the index wraps modulo N in
//! both directions. Manual navigation restarts the auto-advance countdown
//! rather than resuming a partial one.

use crate::config::RotatorConfig;
use std::time::{Duration, Instant};

/// Minimum horizontal travel, in logical pixels, for a gesture to count as
/// a swipe. Gestures at or below the threshold are ignored.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction resolved from a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: advance to the next slide.
    Next,
    /// Finger travelled right: go back to the previous slide.
    Prev,
}

/// In-flight swipe gesture tracking.
#[derive(Debug, Clone, Copy)]
struct Swipe {
    start_x: f32,
}

/// Messages emitted by the rotator frame widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Prev,
    GoTo(usize),
    /// Pointer or focus entered the rotator.
    Entered,
    /// Pointer or focus left the rotator.
    Exited,
    /// A touch gesture started at the given x position.
    SwipeStarted(f32),
    /// A touch gesture moved to the given x position.
    SwipeMoved(f32),
    /// A touch gesture ended at the given x position.
    SwipeEnded(f32),
}

/// State machine for one carousel instance.
#[derive(Debug, Clone)]
pub struct Rotator {
    len: usize,
    current: usize,
    interval: Duration,
    autoplay: bool,
    pause_on_hover: bool,
    hovered: bool,
    last_advance: Instant,
    swipe: Option<Swipe>,
}

impl Rotator {
    /// Creates a rotator over `len` slides with the given auto-advance
    /// interval. Autoplay and pause-on-hover are enabled.
    #[must_use]
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            current: 0,
            interval,
            autoplay: true,
            pause_on_hover: true,
            hovered: false,
            last_advance: Instant::now(),
            swipe: None,
        }
    }

    /// Creates a rotator honoring the `[rotators]` configuration section.
    #[must_use]
    pub fn configured(len: usize, interval: Duration, config: &RotatorConfig) -> Self {
        Self::new(len, interval)
            .autoplay(config.autoplay.unwrap_or(true))
            .pause_on_hover(config.pause_on_hover.unwrap_or(true))
    }

    /// Sets whether this rotator advances automatically.
    #[must_use]
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Sets whether hovering suspends auto-advance.
    #[must_use]
    pub fn pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Starts from the slide already marked active in the content.
    #[must_use]
    pub fn starting_at(mut self, index: usize) -> Self {
        if self.len > 0 {
            self.current = index % self.len;
        }
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the single current slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether auto-advance is currently suspended by hover/focus.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.hovered && self.pause_on_hover
    }

    /// Whether manual prev/next controls are meaningful.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// The instant of the next automatic advance, if one is scheduled.
    #[must_use]
    pub fn next_advance_at(&self) -> Option<Instant> {
        if self.autoplay && self.len > 1 && !self.is_paused() {
            Some(self.last_advance + self.interval)
        } else {
            None
        }
    }

    /// Jumps to a slide. Any integer is accepted; the index wraps modulo N
    /// in both directions. Restarts the auto-advance countdown.
    pub fn go_to(&mut self, index: isize) {
        if self.len == 0 {
            return;
        }
        let n = self.len as isize;
        self.current = (((index % n) + n) % n) as usize;
        self.restart();
    }

    /// Advances one slide. No-op for fewer than two slides.
    pub fn next(&mut self) {
        if self.has_controls() {
            self.go_to(self.current as isize + 1);
        }
    }

    /// Goes back one slide. No-op for fewer than two slides.
    pub fn prev(&mut self) {
        if self.has_controls() {
            self.go_to(self.current as isize - 1);
        }
    }

    /// Advances automatically when the interval has elapsed.
    ///
    /// Returns whether the rotator advanced. Should be called from the
    /// periodic application tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_advance_at() else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        self.last_advance = now;
        true
    }

    /// Updates the hover/focus state. Leaving restarts the full countdown
    /// window rather than resuming a partial one.
    pub fn set_hovered(&mut self, hovered: bool) {
        let was_paused = self.is_paused();
        self.hovered = hovered;
        if was_paused && !self.is_paused() {
            self.restart();
        }
    }

    /// Begins tracking a swipe gesture.
    pub fn swipe_start(&mut self, x: f32) {
        if self.has_controls() {
            self.swipe = Some(Swipe { start_x: x });
        }
    }

    /// Tracks swipe movement. Kept for parity with the gesture protocol; the
    /// decision is made from the final position.
    pub fn swipe_move(&mut self, _x: f32) {}

    /// Completes a swipe gesture, navigating when the horizontal travel
    /// exceeds [`SWIPE_THRESHOLD`].
    ///
    /// Returns the resolved direction, if the gesture counted as a swipe.
    pub fn swipe_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let swipe = self.swipe.take()?;
        let delta = x - swipe.start_x;
        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if delta < 0.0 {
            self.next();
            Some(SwipeDirection::Next)
        } else {
            self.prev();
            Some(SwipeDirection::Prev)
        }
    }

    /// Handles a rotator message from the frame widgets.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Next => self.next(),
            Message::Prev => self.prev(),
            Message::GoTo(index) => self.go_to(index as isize),
            Message::Entered => self.set_hovered(true),
            Message::Exited => self.set_hovered(false),
            Message::SwipeStarted(x) => self.swipe_start(x),
            Message::SwipeMoved(x) => self.swipe_move(x),
            Message::SwipeEnded(x) => {
                self.swipe_end(x);
            }
        }
    }

    /// Restarts the auto-advance countdown from now.
    fn restart(&mut self) {
        self.last_advance = Instant::now();
    }
}
