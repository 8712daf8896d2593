// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system, plus the `ToastLifetime` newtype that
//! keeps configured display durations inside a sane range.

use crate::config::{
    DEFAULT_TOAST_LIFETIME_SECS, MAX_TOAST_LIFETIME_SECS, MIN_TOAST_LIFETIME_SECS,
};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Duration of the exit transition played before a toast is detached.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines visual styling (accent color and glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Neutral informational message (navy accent).
    #[default]
    Info,
    /// Operation completed successfully (green accent).
    Success,
    /// Non-blocking problem worth attention (amber accent).
    Warning,
    /// Validation or submission failure (red accent).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// Display lifetime of a toast in seconds, clamped to the valid range.
///
/// # Example
///
/// ```
/// use iced_campus::ui::notifications::ToastLifetime;
///
/// let lifetime = ToastLifetime::new(7);
/// assert_eq!(lifetime.value(), 7);
///
/// // Values outside range are clamped
/// let too_long = ToastLifetime::new(60);
/// assert_eq!(too_long.value(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastLifetime(u64);

impl ToastLifetime {
    /// Creates a new lifetime value, clamping to the valid range.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(MIN_TOAST_LIFETIME_SECS, MAX_TOAST_LIFETIME_SECS))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for ToastLifetime {
    fn default() -> Self {
        Self(DEFAULT_TOAST_LIFETIME_SECS)
    }
}

/// Lifecycle phase of a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible, lifetime not yet elapsed.
    Shown,
    /// Lifetime elapsed; playing the exit transition.
    Leaving,
    /// Exit transition finished; the toast should be detached.
    Gone,
}

/// One line of a notification message (an i18n key plus arguments).
///
/// Validation reports several failures in one toast, one line each, matching
/// the combined error list the forms produce.
#[derive(Debug, Clone)]
pub struct Line {
    key: String,
    args: Vec<(String, String)>,
}

impl Line {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Kind (determines accent color and glyph).
    kind: Kind,
    /// Message lines, resolved through i18n at render time.
    lines: Vec<Line>,
    /// When this notification was created.
    created_at: Instant,
    /// Custom lifetime overriding the center default.
    custom_lifetime: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given kind and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(kind: Kind, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            lines: vec![Line {
                key: message_key.into(),
                args: Vec::new(),
            }],
            created_at: Instant::now(),
            custom_lifetime: None,
        }
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Info, message_key)
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Success, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Kind::Error, message_key)
    }

    /// Creates an error notification from a list of validation error keys,
    /// one message line per key.
    #[must_use]
    pub fn error_list(keys: &[&str]) -> Self {
        let mut notification = Self::error(keys.first().copied().unwrap_or("error-unknown"));
        for key in keys.iter().skip(1) {
            notification = notification.with_line(*key);
        }
        notification
    }

    /// Adds an argument for interpolation into the most recent line.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(line) = self.lines.last_mut() {
            line.args.push((key.into(), value.into()));
        }
        self
    }

    /// Appends another message line.
    #[must_use]
    pub fn with_line(mut self, key: impl Into<String>) -> Self {
        self.lines.push(Line {
            key: key.into(),
            args: Vec::new(),
        });
        self
    }

    /// Sets a custom lifetime, overriding the center default.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.custom_lifetime = Some(lifetime);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the custom lifetime, if one was set.
    #[must_use]
    pub fn custom_lifetime(&self) -> Option<Duration> {
        self.custom_lifetime
    }

    pub(super) fn set_lifetime(&mut self, lifetime: Duration) {
        self.custom_lifetime = Some(lifetime);
    }

    /// Returns the effective display lifetime.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.custom_lifetime
            .unwrap_or_else(|| ToastLifetime::default().as_duration())
    }

    /// Returns the lifecycle phase at the given instant.
    ///
    /// The phase is monotone in `now`: once a toast is `Leaving` it never
    /// returns to `Shown`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let shown_until = self.created_at + self.lifetime();
        if now < shown_until {
            Phase::Shown
        } else if now < shown_until + EXIT_TRANSITION {
            Phase::Leaving
        } else {
            Phase::Gone
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let info = Kind::Info.color();
        let success = Kind::Success.color();
        let warning = Kind::Warning.color();
        let error = Kind::Error.color();

        assert_ne!(info, success);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::info("k").kind(), Kind::Info);
        assert_eq!(Notification::success("k").kind(), Kind::Success);
        assert_eq!(Notification::warning("k").kind(), Kind::Warning);
        assert_eq!(Notification::error("k").kind(), Kind::Error);
    }

    #[test]
    fn error_list_builds_one_line_per_key() {
        let notification =
            Notification::error_list(&["error-email-invalid", "error-password-too-short"]);
        assert_eq!(notification.kind(), Kind::Error);
        let keys: Vec<&str> = notification.lines().iter().map(Line::key).collect();
        assert_eq!(keys, vec!["error-email-invalid", "error-password-too-short"]);
    }

    #[test]
    fn with_arg_attaches_to_latest_line() {
        let notification = Notification::success("notification-contact-success")
            .with_arg("name", "Lindiwe")
            .with_line("notification-newsletter-success");

        let lines = notification.lines();
        assert_eq!(lines[0].args(), &[("name".into(), "Lindiwe".into())]);
        assert!(lines[1].args().is_empty());
    }

    #[test]
    fn toast_lifetime_clamps_to_valid_range() {
        assert_eq!(ToastLifetime::new(0).value(), MIN_TOAST_LIFETIME_SECS);
        assert_eq!(ToastLifetime::new(60).value(), MAX_TOAST_LIFETIME_SECS);
        assert_eq!(ToastLifetime::new(7).value(), 7);
    }

    #[test]
    fn phase_respects_full_lifetime_window() {
        let notification =
            Notification::info("notification-download-started").with_lifetime(Duration::from_millis(5000));
        let start = notification.created_at();

        assert_eq!(notification.phase_at(start), Phase::Shown);
        assert_eq!(
            notification.phase_at(start + Duration::from_millis(4999)),
            Phase::Shown
        );
        assert_eq!(
            notification.phase_at(start + Duration::from_millis(5001)),
            Phase::Leaving
        );
        assert_eq!(
            notification.phase_at(start + Duration::from_millis(5299)),
            Phase::Leaving
        );
        assert_eq!(
            notification.phase_at(start + Duration::from_millis(5301)),
            Phase::Gone
        );
    }

    #[test]
    fn default_lifetime_is_used_without_custom_value() {
        let notification = Notification::info("k");
        assert_eq!(
            notification.lifetime(),
            ToastLifetime::default().as_duration()
        );
    }
}
