// SPDX-License-Identifier: MPL-2.0
//! Screen components, one per page of the kiosk.
//!
//! Each screen owns its state and messages and escalates side effects to the
//! application through [`Event`]: toast notifications, submission requests,
//! and simulated downloads. Screens never touch the notification center or
//! the submission service directly.

pub mod auth;
pub mod courses;
pub mod home;
pub mod insights;
pub mod resources;
pub mod schedule;

use crate::submission::FormPayload;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::validation::FieldStatus;
use iced::widget::{text_input, Column, Text};
use iced::Element;

/// Side effects a screen asks the application to perform.
#[derive(Debug)]
pub enum Event {
    None,
    /// Show a toast.
    Notify(Notification),
    /// Hand a validated payload to the submission service.
    Submit(FormPayload),
    /// Start a simulated download of the named file.
    Download(String),
    /// Switch to another screen.
    Navigate(crate::app::Screen),
}

/// A labelled, validation-highlighted text input.
pub(crate) fn labeled_input<'a, M: Clone + 'a>(
    label: String,
    value: &str,
    status: FieldStatus,
    secure: bool,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let input = text_input("", value)
        .on_input(on_input)
        .secure(secure)
        .padding(spacing::XS)
        .style(styles::text_input::validated(status));

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}

/// A section heading in the screen body.
pub(crate) fn section_title<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_SM).into()
}
