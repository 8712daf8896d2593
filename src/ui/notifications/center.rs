// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Center` owns the single toast display slot. Showing a notification
//! replaces whatever is live; there is no queue. Auto-dismiss is driven by
//! the application tick, which is only scheduled while a toast exists.

use super::notification::{Notification, NotificationId, Phase, ToastLifetime};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (the embedded close control).
    Dismiss(NotificationId),
}

/// Owns the toast display slot and its default lifetime.
#[derive(Debug, Default)]
pub struct Center {
    /// The currently displayed notification, if any.
    slot: Option<Notification>,
    /// Lifetime applied to notifications without a custom one.
    default_lifetime: ToastLifetime,
}

impl Center {
    /// Creates an empty notification center with the default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty notification center with a configured lifetime.
    #[must_use]
    pub fn with_lifetime(default_lifetime: ToastLifetime) -> Self {
        Self {
            slot: None,
            default_lifetime,
        }
    }

    /// Displays a notification, replacing any currently displayed toast.
    ///
    /// Replacement is unconditional: a toast in its exit transition is
    /// removed the same as a fully visible one. Notifications without a
    /// custom lifetime receive the center's configured default.
    pub fn show(&mut self, mut notification: Notification) {
        if notification.custom_lifetime().is_none() {
            notification.set_lifetime(self.default_lifetime.as_duration());
        }
        self.slot = Some(notification);
    }

    /// Dismisses a notification by its ID, removing it immediately.
    ///
    /// Returns `true` if the notification was displayed and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.slot.as_ref().is_some_and(|n| n.id() == id) {
            self.slot = None;
            true
        } else {
            false
        }
    }

    /// Drops the toast once its exit transition has finished.
    ///
    /// Should be called from the periodic application tick.
    pub fn tick(&mut self, now: Instant) {
        if self
            .slot
            .as_ref()
            .is_some_and(|n| n.phase_at(now) == Phase::Gone)
        {
            self.slot = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently displayed notification.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }

    /// Returns whether a toast is currently displayed (in either phase).
    #[must_use]
    pub fn has_toast(&self) -> bool {
        self.slot.is_some()
    }

    /// Removes any displayed toast.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_center_is_empty() {
        let center = Center::new();
        assert!(center.current().is_none());
        assert!(!center.has_toast());
    }

    #[test]
    fn show_displays_the_notification() {
        let mut center = Center::new();
        center.show(Notification::success("test"));
        assert!(center.has_toast());
    }

    #[test]
    fn second_show_replaces_the_first() {
        let mut center = Center::new();
        center.show(Notification::success("first"));
        center.show(Notification::error("second"));

        let current = center.current().expect("toast should be displayed");
        assert_eq!(current.lines()[0].key(), "second");
    }

    #[test]
    fn show_applies_default_lifetime() {
        let mut center = Center::with_lifetime(ToastLifetime::new(9));
        center.show(Notification::info("test"));

        let current = center.current().expect("toast should be displayed");
        assert_eq!(current.lifetime(), Duration::from_secs(9));
    }

    #[test]
    fn show_keeps_custom_lifetime() {
        let mut center = Center::with_lifetime(ToastLifetime::new(9));
        center.show(Notification::info("test").with_lifetime(Duration::from_secs(5)));

        let current = center.current().expect("toast should be displayed");
        assert_eq!(current.lifetime(), Duration::from_secs(5));
    }

    #[test]
    fn dismiss_removes_displayed_toast() {
        let mut center = Center::new();
        let notification = Notification::success("test");
        let id = notification.id();
        center.show(notification);

        assert!(center.dismiss(id));
        assert!(!center.has_toast());
    }

    #[test]
    fn dismiss_with_stale_id_is_a_no_op() {
        let mut center = Center::new();
        let stale = Notification::success("old").id();
        center.show(Notification::success("current"));

        assert!(!center.dismiss(stale));
        assert!(center.has_toast());
    }

    #[test]
    fn tick_removes_toast_after_exit_transition() {
        let mut center = Center::new();
        center.show(Notification::info("test").with_lifetime(Duration::from_millis(100)));
        let created = center.current().unwrap().created_at();

        // Still leaving: toast remains
        center.tick(created + Duration::from_millis(250));
        assert!(center.has_toast());

        // Transition over: toast is detached
        center.tick(created + Duration::from_millis(500));
        assert!(!center.has_toast());
    }

    #[test]
    fn tick_leaves_fresh_toast_alone() {
        let mut center = Center::new();
        center.show(Notification::info("test"));
        let created = center.current().unwrap().created_at();

        center.tick(created + Duration::from_millis(10));
        assert!(center.has_toast());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut center = Center::new();
        let notification = Notification::success("test");
        let id = notification.id();
        center.show(notification);

        center.handle_message(&Message::Dismiss(id));
        assert!(!center.has_toast());
    }
}
