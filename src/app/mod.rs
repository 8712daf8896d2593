// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together localization, configuration, the shared
//! notification center and the per-screen components, and translates
//! escalated events into side effects like submissions and persistence.
//! Policy decisions (window sizing, redirect delays, tick gating) stay close
//! to the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, ToastPosition};
use crate::i18n::fluent::I18n;
use crate::submission::{SimulatedBackend, SubmissionService};
use crate::ui::chat;
use crate::ui::notifications::{self, ToastLifetime};
use crate::ui::screens::{auth, courses, home, insights, resources, schedule};
use crate::ui::theming::ThemeMode;
use iced::{window, Subscription, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging UI components, localization, and
/// persisted state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Whether the navbar hamburger menu is open.
    menu_open: bool,
    home: home::State,
    courses: courses::State,
    schedule: schedule::State,
    resources: resources::State,
    insights: insights::State,
    auth: auth::State,
    /// Floating chat assistant, available on every screen.
    chat: chat::State,
    /// Toast notification center shared by every screen.
    notifications: notifications::Center,
    toast_position: ToastPosition,
    theme_mode: ThemeMode,
    /// Persisted application state (remembered login email).
    app_state: persisted_state::AppState,
    /// The submission backend behind the port trait.
    submission: Arc<dyn SubmissionService>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_toast", &self.notifications.has_toast())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(flags), iced::Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default())
    }
}

impl App {
    /// Initializes application state from configuration and persisted state.
    pub fn new(flags: Flags) -> Self {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let toast_lifetime = ToastLifetime::new(
            config
                .notifications
                .lifetime_secs
                .unwrap_or(config::DEFAULT_TOAST_LIFETIME_SECS),
        );
        let mut notifications = notifications::Center::with_lifetime(toast_lifetime);

        let (app_state, state_warning) = persisted_state::AppState::load();

        // Surface config/state loading issues once the center exists
        if let Some(key) = config_warning {
            notifications.show(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            notifications.show(notifications::Notification::warning(key));
        }

        let latency = Duration::from_secs(
            config
                .submission
                .latency_secs
                .unwrap_or(config::DEFAULT_SUBMISSION_LATENCY_SECS),
        );

        let mut auth = auth::State::new();
        if let Some(email) = &app_state.remembered_email {
            auth.prefill_email(email);
        }

        Self {
            i18n,
            screen: Screen::Home,
            menu_open: false,
            home: home::State::new(&config.rotators),
            courses: courses::State::new(),
            schedule: schedule::State::new(),
            resources: resources::State::new(),
            insights: insights::State::new(&config.rotators),
            auth,
            chat: chat::State::new(),
            notifications,
            toast_position: config.notifications.position.unwrap_or_default(),
            theme_mode: config.general.theme_mode,
            app_state,
            submission: Arc::new(SimulatedBackend::new(latency)),
        }
    }

    /// Window title.
    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    /// Resolved Iced theme.
    pub fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    /// Whether the periodic tick subscription is needed right now.
    fn tick_needed(&self) -> bool {
        self.notifications.has_toast()
            || self.chat.awaiting_badge()
            || match self.screen {
                Screen::Home => self.home.needs_tick(),
                Screen::Insights => self.insights.needs_tick(),
                _ => false,
            }
    }

    /// Active subscriptions: raw events always, the tick only while needed.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.tick_needed()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{FormKind, SubmissionError};
    use crate::ui::screens::Event as ScreenEvent;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn starts_on_home_screen() {
        let app = app();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn navbar_navigation_switches_screen() {
        let mut app = app();
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::Navigate(
            Screen::Insights,
        )));
        assert_eq!(app.screen, Screen::Insights);
    }

    #[test]
    fn screen_notify_event_lands_in_the_center() {
        let mut app = app();
        app.notifications.clear();
        let _ = app.handle_screen_event(ScreenEvent::Notify(
            notifications::Notification::info("notification-download-started"),
        ));
        assert!(app.notifications.has_toast());
    }

    #[test]
    fn redirect_message_switches_screen() {
        let mut app = app();
        let _ = app.update(Message::RedirectTo(Screen::Login));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn failed_submission_shows_error_toast() {
        let mut app = app();
        app.notifications.clear();
        let _ = app.update(Message::SubmissionCompleted {
            kind: FormKind::Contact,
            result: Err(SubmissionError::Unavailable),
        });

        let toast = app.notifications.current().expect("toast should show");
        assert_eq!(
            toast.lines()[0].key(),
            "notification-submission-unavailable"
        );
    }

    #[test]
    fn escape_closes_the_open_modal() {
        let mut app = app();
        app.screen = Screen::Courses;
        let _ = app.update(Message::Courses(
            crate::ui::screens::courses::Message::OpenEnroll(0),
        ));
        assert!(app.courses.has_modal());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.courses.has_modal());
    }

    #[test]
    fn tick_is_needed_while_a_toast_is_live() {
        let mut app = app();
        app.notifications.clear();
        app.chat.tick(std::time::Instant::now() + Duration::from_secs(10));
        // Home rotators autoplay by default, so the home screen needs ticks
        assert!(app.tick_needed());

        app.screen = Screen::Courses;
        assert!(!app.tick_needed());

        app.notifications
            .show(notifications::Notification::info("notification-download-started"));
        assert!(app.tick_needed());
    }
}
