// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero slideshow, course category track, contact form and
//! newsletter signup.

use super::{labeled_input, section_title, Event};
use crate::content::{self, CourseCategory, HeroSlide};
use crate::i18n::fluent::I18n;
use crate::submission::{FormKind, FormPayload};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::rotator::{self, Rotator};
use crate::ui::styles;
use crate::validation::{self, ErrorList, FieldStatus};
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::fmt;
use std::time::{Duration, Instant};

/// Auto-advance interval for both home rotators.
const ROTATOR_INTERVAL: Duration = Duration::from_secs(5);

/// Visitor role options for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Manager,
    HrOfficer,
    Student,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Employee,
        Role::Manager,
        Role::HrOfficer,
        Role::Student,
        Role::Other,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::HrOfficer => "HR Officer",
            Role::Student => "Student",
            Role::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Programme portfolio options for the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Programme {
    Safety,
    Leadership,
    Skills,
    Learnerships,
}

impl Programme {
    pub const ALL: [Programme; 4] = [
        Programme::Safety,
        Programme::Leadership,
        Programme::Skills,
        Programme::Learnerships,
    ];
}

impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Programme::Safety => "Safety Training",
            Programme::Leadership => "Leadership Development",
            Programme::Skills => "Skills Development",
            Programme::Learnerships => "Learnerships",
        };
        write!(f, "{}", label)
    }
}

/// Contact form fields and their highlight states.
#[derive(Debug, Default)]
struct ContactForm {
    name: String,
    email: String,
    phone: String,
    role: Option<Role>,
    programme: Option<Programme>,
    message: String,
    name_status: FieldStatus,
    email_status: FieldStatus,
    phone_status: FieldStatus,
    message_status: FieldStatus,
    in_flight: bool,
}

impl ContactForm {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(rotator::Message),
    Categories(rotator::Message),
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    RoleSelected(Role),
    ProgrammeSelected(Programme),
    MessageChanged(String),
    SubmitContact,
    NewsletterEmailChanged(String),
    SubmitNewsletter,
}

/// Home screen state.
#[derive(Debug)]
pub struct State {
    hero: Rotator,
    categories: Rotator,
    contact: ContactForm,
    newsletter_email: String,
}

impl State {
    #[must_use]
    pub fn new(config: &crate::config::RotatorConfig) -> Self {
        Self {
            hero: Rotator::configured(content::hero_slides().len(), ROTATOR_INTERVAL, config),
            categories: Rotator::configured(
                CourseCategory::ALL.len(),
                ROTATOR_INTERVAL,
                config,
            ),
            contact: ContactForm::default(),
            newsletter_email: String::new(),
        }
    }

    /// Advances the rotators from the periodic tick.
    pub fn tick(&mut self, now: Instant) {
        self.hero.tick(now);
        self.categories.tick(now);
    }

    /// Whether any rotator on this screen may need the tick subscription.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.hero.next_advance_at().is_some() || self.categories.next_advance_at().is_some()
    }

    /// Routes raw touch gestures to the swipe-enabled category track.
    pub fn swipe(&mut self, message: rotator::Message) {
        self.categories.update(message);
    }

    /// Marks the in-flight submission as finished, resetting on success.
    pub fn submission_finished(&mut self, succeeded: bool) {
        self.contact.in_flight = false;
        if succeeded {
            self.contact.reset();
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Hero(msg) => {
                self.hero.update(msg);
                Event::None
            }
            Message::Categories(msg) => {
                self.categories.update(msg);
                Event::None
            }
            Message::NameChanged(value) => {
                self.contact.name = value;
                self.contact.name_status = FieldStatus::Neutral;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.contact.email = value;
                self.contact.email_status = FieldStatus::Neutral;
                Event::None
            }
            Message::PhoneChanged(value) => {
                self.contact.phone = value;
                self.contact.phone_status = FieldStatus::Neutral;
                Event::None
            }
            Message::RoleSelected(role) => {
                self.contact.role = Some(role);
                Event::None
            }
            Message::ProgrammeSelected(programme) => {
                self.contact.programme = Some(programme);
                Event::None
            }
            Message::MessageChanged(value) => {
                self.contact.message = value;
                self.contact.message_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SubmitContact => self.submit_contact(),
            Message::NewsletterEmailChanged(value) => {
                self.newsletter_email = value;
                Event::None
            }
            Message::SubmitNewsletter => self.submit_newsletter(),
        }
    }

    /// Validates the contact form; submits it when every check passes.
    fn submit_contact(&mut self) -> Event {
        if self.contact.in_flight {
            return Event::None;
        }

        let mut errors = ErrorList::new();
        self.contact.name_status =
            errors.check(validation::has_min_len(&self.contact.name, 2), "error-name-too-short");
        self.contact.email_status = errors.check(
            validation::is_valid_email(&self.contact.email),
            "error-email-invalid",
        );
        self.contact.phone_status = errors.check(
            validation::has_min_len(&self.contact.phone, 10),
            "error-phone-invalid",
        );
        errors.check(self.contact.role.is_some(), "error-role-missing");
        errors.check(self.contact.programme.is_some(), "error-programme-missing");
        self.contact.message_status = errors.check(
            validation::has_min_len(&self.contact.message, 10),
            "error-message-too-short",
        );

        if !errors.is_empty() {
            return Event::Notify(Notification::error_list(&errors.into_keys()));
        }

        self.contact.in_flight = true;
        let payload = FormPayload::new(FormKind::Contact)
            .with_field("name", self.contact.name.trim())
            .with_field("email", self.contact.email.trim())
            .with_field("phone", self.contact.phone.trim())
            .with_field(
                "role",
                self.contact.role.map(|r| r.to_string()).unwrap_or_default(),
            )
            .with_field(
                "programme",
                self.contact
                    .programme
                    .map(|p| p.to_string())
                    .unwrap_or_default(),
            )
            .with_field("message", self.contact.message.trim());
        Event::Submit(payload)
    }

    /// Newsletter signup confirms immediately; there is nothing to wait for.
    fn submit_newsletter(&mut self) -> Event {
        if validation::is_valid_email(&self.newsletter_email) {
            self.newsletter_email.clear();
            Event::Notify(Notification::success("notification-newsletter-success"))
        } else {
            Event::Notify(Notification::error("error-email-invalid"))
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let hero = rotator::view(
            &self.hero,
            rotator::Frame {
                slide: hero_slide(content::hero_slides(), self.hero.current()),
                show_controls: true,
                show_indicators: true,
            },
        )
        .map(Message::Hero);

        let categories = rotator::view(
            &self.categories,
            rotator::Frame {
                slide: category_slide(i18n, self.categories.current()),
                show_controls: true,
                show_indicators: true,
            },
        )
        .map(Message::Categories);

        let body = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(hero)
            .push(section_title(i18n.tr("home-categories-title")))
            .push(categories)
            .push(section_title(i18n.tr("home-contact-title")))
            .push(self.contact_form(i18n))
            .push(self.newsletter_row(i18n));

        scrollable(body).into()
    }

    fn contact_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.contact;

        let submit_label = if form.in_flight {
            i18n.tr("form-sending")
        } else {
            i18n.tr("home-contact-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitContact);
        }

        let column = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .push(labeled_input(
                i18n.tr("field-name"),
                &form.name,
                form.name_status,
                false,
                Message::NameChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-email"),
                &form.email,
                form.email_status,
                false,
                Message::EmailChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-phone"),
                &form.phone,
                form.phone_status,
                false,
                Message::PhoneChanged,
            ))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr("field-role")).size(typography::BODY))
                    .push(pick_list(Role::ALL, form.role, Message::RoleSelected)),
            )
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr("field-programme")).size(typography::BODY))
                    .push(pick_list(
                        Programme::ALL,
                        form.programme,
                        Message::ProgrammeSelected,
                    )),
            )
            .push(labeled_input(
                i18n.tr("field-message"),
                &form.message,
                form.message_status,
                false,
                Message::MessageChanged,
            ))
            .push(submit);

        Container::new(column)
            .padding(spacing::MD)
            .style(styles::container::card)
            .into()
    }

    fn newsletter_row<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text_input(
                    &i18n.tr("newsletter-placeholder"),
                    &self.newsletter_email,
                )
                .on_input(Message::NewsletterEmailChanged)
                .on_submit(Message::SubmitNewsletter)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::FORM_WIDTH / 2.0)),
            )
            .push(
                button(Text::new(i18n.tr("newsletter-submit")))
                    .on_press(Message::SubmitNewsletter)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::primary),
            );

        Column::new()
            .spacing(spacing::XS)
            .push(section_title(i18n.tr("newsletter-title")))
            .push(row)
            .into()
    }
}

/// Renders the current hero slide.
fn hero_slide<'a>(slides: &'a [HeroSlide], index: usize) -> Element<'a, rotator::Message> {
    let Some(slide) = slides.get(index) else {
        return Text::new("").into();
    };

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(slide.title)
                .size(typography::TITLE_LG)
                .color(palette::PRIMARY_400),
        )
        .push(Text::new(slide.subtitle).size(typography::BODY_LG))
        .into()
}

/// Renders the current category slide with its courses.
fn category_slide<'a>(i18n: &'a I18n, index: usize) -> Element<'a, rotator::Message> {
    let Some(category) = CourseCategory::ALL.get(index).copied() else {
        return Text::new("").into();
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(category.message_key()))
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_400),
        );
    for course in content::courses().iter().filter(|c| c.category == category) {
        column = column.push(Text::new(course.title).size(typography::BODY));
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotatorConfig;

    fn state() -> State {
        State::new(&RotatorConfig::default())
    }

    fn fill_valid_contact(state: &mut State) {
        state.update(Message::NameChanged("Nomsa Dlamini".into()));
        state.update(Message::EmailChanged("nomsa@example.com".into()));
        state.update(Message::PhoneChanged("0115550199".into()));
        state.update(Message::RoleSelected(Role::Manager));
        state.update(Message::ProgrammeSelected(Programme::Safety));
        state.update(Message::MessageChanged(
            "We need safety training for two teams.".into(),
        ));
    }

    #[test]
    fn invalid_contact_form_notifies_with_all_errors() {
        let mut state = state();
        let event = state.update(Message::SubmitContact);

        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.lines().len(), 6);
            }
            other => panic!("expected Notify, got {:?}", other),
        }
        assert!(state.contact.name_status.is_invalid());
        assert!(state.contact.email_status.is_invalid());
    }

    #[test]
    fn valid_contact_form_submits_payload() {
        let mut state = state();
        fill_valid_contact(&mut state);

        let event = state.update(Message::SubmitContact);
        match event {
            Event::Submit(payload) => {
                assert_eq!(payload.kind(), FormKind::Contact);
                assert!(payload.missing_fields().is_empty());
                assert_eq!(payload.field("name"), Some("Nomsa Dlamini"));
            }
            other => panic!("expected Submit, got {:?}", other),
        }
        assert!(state.contact.in_flight);
    }

    #[test]
    fn double_submit_while_in_flight_is_ignored() {
        let mut state = state();
        fill_valid_contact(&mut state);

        assert!(matches!(
            state.update(Message::SubmitContact),
            Event::Submit(_)
        ));
        assert!(matches!(state.update(Message::SubmitContact), Event::None));
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut state = state();
        fill_valid_contact(&mut state);
        let _ = state.update(Message::SubmitContact);

        state.submission_finished(true);
        assert!(!state.contact.in_flight);
        assert!(state.contact.name.is_empty());
    }

    #[test]
    fn failed_submission_keeps_the_form_contents() {
        let mut state = state();
        fill_valid_contact(&mut state);
        let _ = state.update(Message::SubmitContact);

        state.submission_finished(false);
        assert!(!state.contact.in_flight);
        assert_eq!(state.contact.name, "Nomsa Dlamini");
    }

    #[test]
    fn editing_a_field_clears_its_error_highlight() {
        let mut state = state();
        let _ = state.update(Message::SubmitContact);
        assert!(state.contact.email_status.is_invalid());

        state.update(Message::EmailChanged("n".into()));
        assert_eq!(state.contact.email_status, FieldStatus::Neutral);
    }

    #[test]
    fn newsletter_accepts_valid_email() {
        let mut state = state();
        state.update(Message::NewsletterEmailChanged("a@b.com".into()));
        let event = state.update(Message::SubmitNewsletter);

        match event {
            Event::Notify(notification) => {
                assert_eq!(
                    notification.lines()[0].key(),
                    "notification-newsletter-success"
                );
            }
            other => panic!("expected Notify, got {:?}", other),
        }
        assert!(state.newsletter_email.is_empty());
    }

    #[test]
    fn newsletter_rejects_invalid_email() {
        let mut state = state();
        state.update(Message::NewsletterEmailChanged("nope".into()));
        let event = state.update(Message::SubmitNewsletter);

        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.lines()[0].key(), "error-email-invalid");
            }
            other => panic!("expected Notify, got {:?}", other),
        }
    }

    #[test]
    fn swipe_routes_to_the_category_track() {
        let mut state = state();
        state.swipe(rotator::Message::SwipeStarted(200.0));
        state.swipe(rotator::Message::SwipeEnded(100.0));
        assert_eq!(state.categories.current(), 1);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _ = state.view(&i18n);
    }
}
