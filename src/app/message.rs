// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::submission::{Confirmation, FormKind, SubmissionError};
use crate::ui::chat;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::rotator;
use crate::ui::screens::{auth, courses, home, insights, resources, schedule};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Courses(courses::Message),
    Schedule(schedule::Message),
    Resources(resources::Message),
    Insights(insights::Message),
    Auth(auth::Message),
    Chat(chat::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast lifetimes, rotator auto-advance and the
    /// chat badge.
    Tick(Instant),
    /// A raw touch gesture routed to the active screen's rotator.
    SwipeGesture(rotator::Message),
    /// Escape closes whichever modal is open on the active screen.
    EscapePressed,
    /// The submission service resolved a form.
    SubmissionCompleted {
        kind: FormKind,
        result: Result<Confirmation, SubmissionError>,
    },
    /// A simulated download finished.
    DownloadFinished(String),
    /// A post-submission redirect fired (login and signup flows).
    RedirectTo(Screen),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAMPUS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `ICED_CAMPUS_DATA_DIR`.
    pub data_dir: Option<String>,
}
