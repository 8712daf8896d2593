// SPDX-License-Identifier: MPL-2.0
//! Courses screen: category filter chips, live search, and the enrollment
//! modal form.

use super::{labeled_input, section_title, Event};
use crate::content::{self, Course, CourseCategory};
use crate::i18n::fluent::I18n;
use crate::submission::{FormKind, FormPayload};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::validation::{self, ErrorList, FieldStatus};
use iced::widget::{button, pick_list, scrollable, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::fmt;

/// Delivery preference options in the enrollment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    InPerson,
    Online,
    Either,
}

impl Preference {
    pub const ALL: [Preference; 3] = [Preference::InPerson, Preference::Online, Preference::Either];
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Preference::InPerson => "In person",
            Preference::Online => "Online",
            Preference::Either => "Either",
        };
        write!(f, "{}", label)
    }
}

/// Prior experience options in the enrollment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
    ];
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Advanced => "Advanced",
        };
        write!(f, "{}", label)
    }
}

/// Enrollment modal form state.
#[derive(Debug)]
struct EnrollForm {
    course_title: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    company: String,
    experience: Option<Experience>,
    preference: Option<Preference>,
    comments: String,
    first_name_status: FieldStatus,
    last_name_status: FieldStatus,
    email_status: FieldStatus,
    phone_status: FieldStatus,
    in_flight: bool,
}

impl EnrollForm {
    fn new(course_title: String) -> Self {
        Self {
            course_title,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            experience: None,
            preference: None,
            comments: String::new(),
            first_name_status: FieldStatus::Neutral,
            last_name_status: FieldStatus::Neutral,
            email_status: FieldStatus::Neutral,
            phone_status: FieldStatus::Neutral,
            in_flight: false,
        }
    }
}

/// Messages emitted by the courses screen.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Option<CourseCategory>),
    SearchChanged(String),
    OpenEnroll(usize),
    CloseEnroll,
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CompanyChanged(String),
    ExperienceSelected(Experience),
    PreferenceSelected(Preference),
    CommentsChanged(String),
    SubmitEnroll,
}

/// Courses screen state.
#[derive(Debug, Default)]
pub struct State {
    filter: Option<CourseCategory>,
    search: String,
    enroll: Option<EnrollForm>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the enrollment modal is open (used by Escape handling).
    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.enroll.is_some()
    }

    /// Closes the enrollment modal, discarding its contents.
    pub fn close_modal(&mut self) {
        self.enroll = None;
    }

    /// Marks the in-flight submission as finished; success closes the modal.
    pub fn submission_finished(&mut self, succeeded: bool) {
        if succeeded {
            self.enroll = None;
        } else if let Some(form) = &mut self.enroll {
            form.in_flight = false;
        }
    }

    /// Courses matching the active filter chip and search term.
    #[must_use]
    pub fn filtered_courses(&self, i18n: &I18n) -> Vec<&'static Course> {
        let term = self.search.to_lowercase();
        content::courses()
            .iter()
            .filter(|course| {
                self.filter
                    .is_none_or(|category| course.category == category)
            })
            .filter(|course| {
                term.is_empty()
                    || course.title.to_lowercase().contains(&term)
                    || course.description.to_lowercase().contains(&term)
                    || i18n
                        .tr(course.category.message_key())
                        .to_lowercase()
                        .contains(&term)
            })
            .collect()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FilterSelected(filter) => {
                self.filter = filter;
                Event::None
            }
            Message::SearchChanged(value) => {
                self.search = value;
                Event::None
            }
            Message::OpenEnroll(index) => {
                if let Some(course) = content::courses().get(index) {
                    self.enroll = Some(EnrollForm::new(course.title.to_string()));
                }
                Event::None
            }
            Message::CloseEnroll => {
                self.close_modal();
                Event::None
            }
            Message::FirstNameChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.first_name = value;
                    form.first_name_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::LastNameChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.last_name = value;
                    form.last_name_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::EmailChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.email = value;
                    form.email_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::PhoneChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.phone = value;
                    form.phone_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::CompanyChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.company = value;
                }
                Event::None
            }
            Message::ExperienceSelected(experience) => {
                if let Some(form) = &mut self.enroll {
                    form.experience = Some(experience);
                }
                Event::None
            }
            Message::PreferenceSelected(preference) => {
                if let Some(form) = &mut self.enroll {
                    form.preference = Some(preference);
                }
                Event::None
            }
            Message::CommentsChanged(value) => {
                if let Some(form) = &mut self.enroll {
                    form.comments = value;
                }
                Event::None
            }
            Message::SubmitEnroll => self.submit_enroll(),
        }
    }

    /// Validates the enrollment form; submits it when every check passes.
    fn submit_enroll(&mut self) -> Event {
        let Some(form) = &mut self.enroll else {
            return Event::None;
        };
        if form.in_flight {
            return Event::None;
        }

        let mut errors = ErrorList::new();
        form.first_name_status = errors.check(
            validation::has_min_len(&form.first_name, 2),
            "error-first-name-too-short",
        );
        form.last_name_status = errors.check(
            validation::has_min_len(&form.last_name, 2),
            "error-last-name-too-short",
        );
        form.email_status = errors.check(
            validation::is_valid_email(&form.email),
            "error-email-invalid",
        );
        form.phone_status = errors.check(
            validation::has_min_len(&form.phone, 10),
            "error-phone-invalid",
        );

        if !errors.is_empty() {
            return Event::Notify(Notification::error_list(&errors.into_keys()));
        }

        form.in_flight = true;
        let payload = FormPayload::new(FormKind::Enrollment)
            .with_field("course", form.course_title.as_str())
            .with_field("first_name", form.first_name.trim())
            .with_field("last_name", form.last_name.trim())
            .with_field("email", form.email.trim())
            .with_field("phone", form.phone.trim())
            .with_field("company", form.company.trim())
            .with_field(
                "experience",
                form.experience.map(|e| e.to_string()).unwrap_or_default(),
            )
            .with_field(
                "preference",
                form.preference.map(|p| p.to_string()).unwrap_or_default(),
            )
            .with_field("comments", form.comments.trim());
        Event::Submit(payload)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut chips = Row::new().spacing(spacing::XS);
        chips = chips.push(chip(
            i18n.tr("filter-all"),
            self.filter.is_none(),
            Message::FilterSelected(None),
        ));
        for category in CourseCategory::ALL {
            chips = chips.push(chip(
                i18n.tr(category.message_key()),
                self.filter == Some(category),
                Message::FilterSelected(Some(category)),
            ));
        }

        let search = text_input(&i18n.tr("courses-search-placeholder"), &self.search)
            .on_input(Message::SearchChanged)
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::FORM_WIDTH));

        let mut grid = Column::new().spacing(spacing::SM);
        let filtered = self.filtered_courses(i18n);
        if filtered.is_empty() {
            grid = grid.push(Text::new(i18n.tr("courses-empty")).size(typography::BODY));
        }
        for course in filtered {
            grid = grid.push(course_card(i18n, course));
        }

        let body = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(section_title(i18n.tr("courses-title")))
            .push(chips)
            .push(search)
            .push(grid);

        let base: Element<'a, Message> = scrollable(body).into();

        match &self.enroll {
            Some(form) => Stack::new()
                .push(base)
                .push(self.enroll_modal(i18n, form))
                .into(),
            None => base,
        }
    }

    fn enroll_modal<'a>(&'a self, i18n: &'a I18n, form: &'a EnrollForm) -> Element<'a, Message> {
        let submit_label = if form.in_flight {
            i18n.tr("form-submitting")
        } else {
            i18n.tr("enroll-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitEnroll);
        }

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(i18n.tr_with_args(
                        "enroll-title",
                        &[("course", form.course_title.as_str())],
                    ))
                    .size(typography::TITLE_SM)
                    .color(palette::PRIMARY_400),
                )
                .width(Length::Fill),
            )
            .push(
                button(Text::new("✕"))
                    .on_press(Message::CloseEnroll)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            );

        let fields = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(labeled_input(
                i18n.tr("field-first-name"),
                &form.first_name,
                form.first_name_status,
                false,
                Message::FirstNameChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-last-name"),
                &form.last_name,
                form.last_name_status,
                false,
                Message::LastNameChanged,
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
            .push(labeled_input(
                i18n.tr("field-company"),
                &form.company,
                FieldStatus::Neutral,
                false,
                Message::CompanyChanged,
            ))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(pick_list(
                        Experience::ALL,
                        form.experience,
                        Message::ExperienceSelected,
                    ))
                    .push(pick_list(
                        Preference::ALL,
                        form.preference,
                        Message::PreferenceSelected,
                    )),
            )
            .push(labeled_input(
                i18n.tr("field-comments"),
                &form.comments,
                FieldStatus::Neutral,
                false,
                Message::CommentsChanged,
            ))
            .push(submit);

        let card = Container::new(scrollable(fields))
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::modal_card);

        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::modal_backdrop)
            .into()
    }
}

/// Renders one filter chip.
fn chip<'a>(label: String, selected: bool, on_press: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| styles::button::chip(theme, status, selected))
        .into()
}

/// Renders one course card with its enroll button.
fn course_card<'a>(i18n: &'a I18n, course: &'static Course) -> Element<'a, Message> {
    let index = content::courses()
        .iter()
        .position(|c| c.title == course.title)
        .unwrap_or(0);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(course.title)
                    .size(typography::TITLE_SM)
                    .color(palette::PRIMARY_400),
            )
            .width(Length::Fill),
        )
        .push(
            Text::new(i18n.tr(course.category.message_key())).size(typography::CAPTION),
        );

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(i18n.tr_with_args("course-duration", &[("duration", course.duration)]))
                    .size(typography::CAPTION),
            )
            .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("course-enroll")))
                .on_press(Message::OpenEnroll(index))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Text::new(course.description).size(typography::BODY))
            .push(footer),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_enroll(state: &mut State) {
        state.update(Message::OpenEnroll(0));
        assert!(state.has_modal());
    }

    #[test]
    fn filter_narrows_to_category() {
        let i18n = I18n::default();
        let mut state = State::new();
        let all = state.filtered_courses(&i18n).len();

        state.update(Message::FilterSelected(Some(CourseCategory::Safety)));
        let safety = state.filtered_courses(&i18n);
        assert!(!safety.is_empty());
        assert!(safety.len() < all);
        assert!(safety
            .iter()
            .all(|c| c.category == CourseCategory::Safety));
    }

    #[test]
    fn search_matches_title_and_description() {
        let i18n = I18n::default();
        let mut state = State::new();

        state.update(Message::SearchChanged("first aid".into()));
        let hits = state.filtered_courses(&i18n);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "First Aid Level 1");

        state.update(Message::SearchChanged("hazard".into()));
        assert_eq!(state.filtered_courses(&i18n).len(), 1);
    }

    #[test]
    fn clearing_search_restores_all_courses() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::SearchChanged("zzz-no-match".into()));
        assert!(state.filtered_courses(&i18n).is_empty());

        state.update(Message::SearchChanged(String::new()));
        assert_eq!(state.filtered_courses(&i18n).len(), content::courses().len());
    }

    #[test]
    fn invalid_enrollment_collects_errors() {
        let mut state = State::new();
        open_enroll(&mut state);

        let event = state.update(Message::SubmitEnroll);
        match event {
            Event::Notify(notification) => assert_eq!(notification.lines().len(), 4),
            other => panic!("expected Notify, got {:?}", other),
        }
        assert!(state.has_modal(), "modal stays open on validation failure");
    }

    #[test]
    fn valid_enrollment_submits_with_course() {
        let mut state = State::new();
        open_enroll(&mut state);
        state.update(Message::FirstNameChanged("Ayanda".into()));
        state.update(Message::LastNameChanged("Mokoena".into()));
        state.update(Message::EmailChanged("ayanda@example.com".into()));
        state.update(Message::PhoneChanged("0825550147".into()));

        let event = state.update(Message::SubmitEnroll);
        match event {
            Event::Submit(payload) => {
                assert_eq!(payload.kind(), FormKind::Enrollment);
                assert_eq!(
                    payload.field("course"),
                    Some(content::courses()[0].title)
                );
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn successful_submission_closes_the_modal() {
        let mut state = State::new();
        open_enroll(&mut state);
        state.submission_finished(true);
        assert!(!state.has_modal());
    }

    #[test]
    fn close_modal_discards_the_form() {
        let mut state = State::new();
        open_enroll(&mut state);
        state.update(Message::FirstNameChanged("Ayanda".into()));
        state.close_modal();
        assert!(!state.has_modal());

        open_enroll(&mut state);
        match &state.enroll {
            Some(form) => assert!(form.first_name.is_empty()),
            None => panic!("modal should be open"),
        }
    }

    #[test]
    fn view_renders_with_and_without_modal() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.view(&i18n);
        open_enroll(&mut state);
        let _ = state.view(&i18n);
    }
}
