// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to report
//! an outcome (form submitted, validation failed, download finished) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kind levels
//! - [`center`] - `NotificationCenter` holding the single display slot
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Single display slot: showing a notification replaces any live toast.
//!   Rapid successive calls never stack; the newest wins.
//! - Lifetime: configurable, 6 s by default; errors use the same window
//!   since every toast carries a manual close control.
//! - Exit transition: 300 ms fade before the toast is detached.
//! - Position: a configurable window corner, top-right by default.

mod center;
mod notification;
mod toast;

pub use center::{Center, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, Phase, ToastLifetime};
pub use toast::Toast;
