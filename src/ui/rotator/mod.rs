// SPDX-License-Identifier: MPL-2.0
//! Cyclic slide rotator shared by every carousel-style component.
//!
//! A rotator cycles visibility among N content panels on a timer, with
//! manual controls that restart the countdown, pause-on-hover, and an
//! optional swipe gesture. The same state machine drives the hero slideshow,
//! the course category track, the insights spotlight, and the press ticker;
//! only the rendered slide content differs.
//!
//! # Components
//!
//! - [`state`] - The `Rotator` state machine (index, timer, gestures)
//! - [`view`] - Frame rendering: slide window, prev/next controls, indicators
//!
//! # Timer model
//!
//! There is no interval handle to leak: the application schedules a periodic
//! tick subscription while any rotator may advance, and each rotator compares
//! the tick instant against its own deadline. Tearing down the view tears
//! down the subscription, and with it every timer.

pub mod state;
pub mod view;

pub use state::{Message, Rotator, SwipeDirection, SWIPE_THRESHOLD};
pub use view::{view, Frame};
