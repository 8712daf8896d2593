// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::submission::{Confirmation, FormKind, SubmissionError};
use crate::ui::chat;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::screens::Event as ScreenEvent;
use iced::Task;
use std::time::Duration;

/// Simulated download latency before the success toast.
const DOWNLOAD_DELAY: Duration = Duration::from_secs(2);

/// Delay between the login success toast and the Home redirect.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Delay between the signup success toast and the Login redirect.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_secs(3);

impl App {
    /// Routes a top-level message to the owning component and turns the
    /// escalated events into tasks.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => {
                match navbar::update(msg, &mut self.menu_open) {
                    navbar::Event::Navigate(screen) => self.screen = screen,
                    navbar::Event::None => {}
                }
                Task::none()
            }
            Message::Home(msg) => {
                let event = self.home.update(msg);
                self.handle_screen_event(event)
            }
            Message::Courses(msg) => {
                let event = self.courses.update(msg);
                self.handle_screen_event(event)
            }
            Message::Schedule(msg) => {
                let event = self.schedule.update(msg);
                self.handle_screen_event(event)
            }
            Message::Resources(msg) => {
                let event = self.resources.update(msg);
                self.handle_screen_event(event)
            }
            Message::Insights(msg) => {
                let event = self.insights.update(msg);
                self.handle_screen_event(event)
            }
            Message::Auth(msg) => {
                let event = self.auth.update(msg);
                self.handle_screen_event(event)
            }
            Message::Chat(msg) => match self.chat.update(msg) {
                Some(reply) => {
                    let body = reply.body;
                    Task::perform(
                        async move {
                            tokio::time::sleep(chat::REPLY_DELAY).await;
                            body
                        },
                        |body| Message::Chat(chat::Message::AgentReplied(body)),
                    )
                }
                None => Task::none(),
            },
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.chat.tick(now);
                match self.screen {
                    Screen::Home => self.home.tick(now),
                    Screen::Insights => self.insights.tick(now),
                    _ => {}
                }
                Task::none()
            }
            Message::SwipeGesture(msg) => {
                match self.screen {
                    Screen::Home => self.home.swipe(msg),
                    Screen::Insights => self.insights.swipe(msg),
                    _ => {}
                }
                Task::none()
            }
            Message::EscapePressed => {
                self.menu_open = false;
                match self.screen {
                    Screen::Courses => self.courses.close_modal(),
                    Screen::Schedule => self.schedule.close_modal(),
                    Screen::Resources => self.resources.close_modal(),
                    _ => {}
                }
                Task::none()
            }
            Message::SubmissionCompleted { kind, result } => {
                self.submission_completed(kind, result)
            }
            Message::DownloadFinished(title) => {
                self.notifications.show(
                    Notification::success("notification-download-success")
                        .with_arg("title", title),
                );
                Task::none()
            }
            Message::RedirectTo(screen) => {
                self.screen = screen;
                Task::none()
            }
        }
    }

    /// Performs the side effects a screen escalated.
    pub(super) fn handle_screen_event(&mut self, event: ScreenEvent) -> Task<Message> {
        match event {
            ScreenEvent::None => Task::none(),
            ScreenEvent::Notify(notification) => {
                self.notifications.show(notification);
                Task::none()
            }
            ScreenEvent::Navigate(screen) => {
                self.screen = screen;
                Task::none()
            }
            ScreenEvent::Download(title) => {
                self.notifications.show(
                    Notification::info("notification-download-started")
                        .with_arg("title", title.clone()),
                );
                Task::perform(
                    async move {
                        tokio::time::sleep(DOWNLOAD_DELAY).await;
                        title
                    },
                    Message::DownloadFinished,
                )
            }
            ScreenEvent::Submit(payload) => {
                let kind = payload.kind();
                let future = self.submission.submit(payload);
                Task::perform(future, move |result| Message::SubmissionCompleted {
                    kind,
                    result,
                })
            }
        }
    }

    /// Handles the submission service's verdict: success toast plus the
    /// kind-specific follow-up flow, or the error toast.
    fn submission_completed(
        &mut self,
        kind: FormKind,
        result: Result<Confirmation, SubmissionError>,
    ) -> Task<Message> {
        match result {
            Ok(confirmation) => {
                // Login stores the remembered email before any form reset
                if kind == FormKind::Login {
                    self.store_remembered_email();
                }
                self.mark_submission_finished(kind, true);

                let mut notification = Notification::success(confirmation.message_key);
                for (name, value) in confirmation.args {
                    notification = notification.with_arg(name, value);
                }
                self.notifications.show(notification);

                match kind {
                    FormKind::Login => redirect_after(Screen::Home, LOGIN_REDIRECT_DELAY),
                    FormKind::Signup => redirect_after(Screen::Login, SIGNUP_REDIRECT_DELAY),
                    _ => Task::none(),
                }
            }
            Err(error) => {
                self.mark_submission_finished(kind, false);
                self.notifications
                    .show(Notification::error(error.message_key()));
                Task::none()
            }
        }
    }

    /// Tells the owning screen its in-flight submission finished.
    fn mark_submission_finished(&mut self, kind: FormKind, succeeded: bool) {
        match kind {
            FormKind::Contact | FormKind::Newsletter => {
                self.home.submission_finished(succeeded);
            }
            FormKind::Enrollment => self.courses.submission_finished(succeeded),
            FormKind::Booking => self.schedule.submission_finished(succeeded),
            FormKind::Promotion => self.resources.submission_finished(succeeded),
            FormKind::Login | FormKind::Signup => {
                self.auth.submission_finished(kind, succeeded);
            }
        }
    }

    /// Persists (or clears) the remembered login email per the remember-me
    /// checkbox, surfacing storage problems as a warning toast.
    fn store_remembered_email(&mut self) {
        self.app_state.remembered_email = if self.auth.login_remember() {
            Some(self.auth.login_email().to_string())
        } else {
            None
        };
        if let Some(warning) = self.app_state.save() {
            self.notifications.show(Notification::warning(warning));
        }
    }
}

/// Schedules a screen switch after a delay.
fn redirect_after(screen: Screen, delay: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            screen
        },
        Message::RedirectTo,
    )
}
