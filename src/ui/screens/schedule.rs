// SPDX-License-Identifier: MPL-2.0
//! Public schedule screen: list/calendar view toggle, location filter,
//! month navigation and the booking modal form.

use super::{labeled_input, section_title, Event};
use crate::content::{self, Location, Session};
use crate::i18n::fluent::I18n;
use crate::submission::{FormKind, FormPayload};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::validation::{self, ErrorList, FieldStatus};
use chrono::{Datelike, Days, Months, NaiveDate};
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Cells in the 6x7 calendar grid.
const GRID_CELLS: u64 = 42;

/// Which presentation of the schedule is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

/// Booking modal form state.
#[derive(Debug)]
struct BookingForm {
    session: Session,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    company: String,
    dietary: String,
    comments: String,
    first_name_status: FieldStatus,
    last_name_status: FieldStatus,
    email_status: FieldStatus,
    phone_status: FieldStatus,
    in_flight: bool,
}

impl BookingForm {
    fn new(session: Session) -> Self {
        Self {
            session,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            dietary: String::new(),
            comments: String::new(),
            first_name_status: FieldStatus::Neutral,
            last_name_status: FieldStatus::Neutral,
            email_status: FieldStatus::Neutral,
            phone_status: FieldStatus::Neutral,
            in_flight: false,
        }
    }
}

/// Messages emitted by the schedule screen.
#[derive(Debug, Clone)]
pub enum Message {
    SetViewMode(ViewMode),
    LocationSelected(Option<Location>),
    PrevMonth,
    NextMonth,
    DayPressed(NaiveDate),
    OpenBooking(usize),
    CloseBooking,
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CompanyChanged(String),
    DietaryChanged(String),
    CommentsChanged(String),
    SubmitBooking,
}

/// Schedule screen state.
#[derive(Debug)]
pub struct State {
    view_mode: ViewMode,
    location: Option<Location>,
    /// First day of the month shown in calendar view.
    month: NaiveDate,
    sessions: Vec<Session>,
    booking: Option<BookingForm>,
}

impl State {
    /// Creates the schedule anchored to the month of the earliest session.
    #[must_use]
    pub fn new() -> Self {
        let sessions = content::sessions();
        let month = sessions
            .iter()
            .map(|s| s.date)
            .min()
            .map(first_of_month)
            .unwrap_or_default();
        Self {
            view_mode: ViewMode::default(),
            location: None,
            month,
            sessions,
            booking: None,
        }
    }

    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.booking.is_some()
    }

    pub fn close_modal(&mut self) {
        self.booking = None;
    }

    /// Marks the in-flight submission as finished; success closes the modal.
    pub fn submission_finished(&mut self, succeeded: bool) {
        if succeeded {
            self.booking = None;
        } else if let Some(form) = &mut self.booking {
            form.in_flight = false;
        }
    }

    /// Sessions visible under the current location filter.
    fn visible_sessions(&self) -> Vec<(usize, &Session)> {
        self.sessions
            .iter()
            .enumerate()
            .filter(|(_, session)| self.location.is_none_or(|l| session.location == l))
            .collect()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
                Event::None
            }
            Message::LocationSelected(location) => {
                self.location = location;
                Event::None
            }
            Message::PrevMonth => {
                if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
                    self.month = month;
                }
                Event::None
            }
            Message::NextMonth => {
                if let Some(month) = self.month.checked_add_months(Months::new(1)) {
                    self.month = month;
                }
                Event::None
            }
            Message::DayPressed(date) => {
                // A day with sessions jumps to the list view
                if self.sessions.iter().any(|s| s.date == date) {
                    self.view_mode = ViewMode::List;
                }
                Event::None
            }
            Message::OpenBooking(index) => {
                if let Some(session) = self.sessions.get(index) {
                    self.booking = Some(BookingForm::new(session.clone()));
                }
                Event::None
            }
            Message::CloseBooking => {
                self.close_modal();
                Event::None
            }
            Message::FirstNameChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.first_name = value;
                    form.first_name_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::LastNameChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.last_name = value;
                    form.last_name_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::EmailChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.email = value;
                    form.email_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::PhoneChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.phone = value;
                    form.phone_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::CompanyChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.company = value;
                }
                Event::None
            }
            Message::DietaryChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.dietary = value;
                }
                Event::None
            }
            Message::CommentsChanged(value) => {
                if let Some(form) = &mut self.booking {
                    form.comments = value;
                }
                Event::None
            }
            Message::SubmitBooking => self.submit_booking(),
        }
    }

    /// Validates the booking form; submits it when every check passes.
    fn submit_booking(&mut self) -> Event {
        let Some(form) = &mut self.booking else {
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
        let payload = FormPayload::new(FormKind::Booking)
            .with_field("course", form.session.course)
            .with_field("date", form.session.date.format("%-d %B %Y").to_string())
            .with_field("first_name", form.first_name.trim())
            .with_field("last_name", form.last_name.trim())
            .with_field("email", form.email.trim())
            .with_field("phone", form.phone.trim())
            .with_field("company", form.company.trim())
            .with_field("dietary", form.dietary.trim())
            .with_field("comments", form.comments.trim());
        Event::Submit(payload)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let toggles = Row::new()
            .spacing(spacing::XS)
            .push(mode_chip(
                i18n.tr("schedule-list-view"),
                self.view_mode == ViewMode::List,
                Message::SetViewMode(ViewMode::List),
            ))
            .push(mode_chip(
                i18n.tr("schedule-calendar-view"),
                self.view_mode == ViewMode::Calendar,
                Message::SetViewMode(ViewMode::Calendar),
            ));

        let mut locations = Row::new().spacing(spacing::XS);
        locations = locations.push(mode_chip(
            i18n.tr("filter-all"),
            self.location.is_none(),
            Message::LocationSelected(None),
        ));
        for location in Location::ALL {
            locations = locations.push(mode_chip(
                i18n.tr(location.message_key()),
                self.location == Some(location),
                Message::LocationSelected(Some(location)),
            ));
        }

        let content: Element<'a, Message> = match self.view_mode {
            ViewMode::List => self.list_view(i18n),
            ViewMode::Calendar => self.calendar_view(i18n),
        };

        let body = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(section_title(i18n.tr("schedule-title")))
            .push(toggles)
            .push(locations)
            .push(content);

        let base: Element<'a, Message> = scrollable(body).into();

        match &self.booking {
            Some(form) => Stack::new()
                .push(base)
                .push(self.booking_modal(i18n, form))
                .into(),
            None => base,
        }
    }

    fn list_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut list = Column::new().spacing(spacing::SM);
        let visible = self.visible_sessions();
        if visible.is_empty() {
            list = list.push(Text::new(i18n.tr("schedule-empty")).size(typography::BODY));
        }
        for (index, session) in visible {
            list = list.push(session_card(i18n, index, session));
        }
        list.into()
    }

    fn calendar_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                button(icons::chevron_left())
                    .on_press(Message::PrevMonth)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            )
            .push(
                Container::new(
                    Text::new(self.month.format("%B %Y").to_string())
                        .size(typography::TITLE_SM),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
            )
            .push(
                button(icons::chevron_right())
                    .on_press(Message::NextMonth)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            );

        let mut weekday_row = Row::new().spacing(spacing::XXS);
        for key in [
            "weekday-sun",
            "weekday-mon",
            "weekday-tue",
            "weekday-wed",
            "weekday-thu",
            "weekday-fri",
            "weekday-sat",
        ] {
            weekday_row = weekday_row.push(
                Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        let mut grid = Column::new().spacing(spacing::XXS).push(weekday_row);
        let days = month_grid(self.month);
        for week in days.chunks(7) {
            let mut row = Row::new().spacing(spacing::XXS);
            for date in week {
                row = row.push(self.day_cell(*date));
            }
            grid = grid.push(row);
        }

        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(grid)
            .into()
    }

    fn day_cell(&self, date: NaiveDate) -> Element<'_, Message> {
        let in_month = date.month() == self.month.month();
        let day_sessions: Vec<&Session> =
            self.sessions.iter().filter(|s| s.date == date).collect();
        let has_event = !day_sessions.is_empty();

        let mut cell = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(date.day().to_string()).size(typography::CAPTION));
        for session in &day_sessions {
            let title: String = session.course.chars().take(15).collect();
            cell = cell.push(
                Text::new(title)
                    .size(typography::CAPTION)
                    .color(palette::PRIMARY_400),
            );
        }

        let styled = Container::new(cell)
            .width(Length::Fill)
            .height(Length::Fixed(56.0))
            .padding(spacing::XXS)
            .style(move |theme: &Theme| day_cell_style(theme, in_month, has_event));

        if has_event {
            button(styled)
                .on_press(Message::DayPressed(date))
                .padding(0.0)
                .style(styles::button::plain)
                .into()
        } else {
            styled.into()
        }
    }

    fn booking_modal<'a>(&'a self, i18n: &'a I18n, form: &'a BookingForm) -> Element<'a, Message> {
        let submit_label = if form.in_flight {
            i18n.tr("form-processing")
        } else {
            i18n.tr("booking-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitBooking);
        }

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(form.session.course)
                        .size(typography::TITLE_SM)
                        .color(palette::PRIMARY_400),
                )
                .width(Length::Fill),
            )
            .push(
                button(Text::new("✕"))
                    .on_press(Message::CloseBooking)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            );

        let details = Text::new(format!(
            "{} · {} · {}",
            form.session.date.format("%-d %B %Y"),
            i18n.tr(form.session.location.message_key()),
            form.session.price
        ))
        .size(typography::BODY);

        let fields = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(details)
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
            .push(labeled_input(
                i18n.tr("field-dietary"),
                &form.dietary,
                FieldStatus::Neutral,
                false,
                Message::DietaryChanged,
            ))
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

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// First day of the month containing `date`.
fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The 42 dates shown for a month: six full weeks starting on the Sunday
/// on or before the first of the month.
#[must_use]
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(month);
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(lead))
        .unwrap_or(first);

    (0..GRID_CELLS)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .collect()
}

/// Renders one view-toggle or filter chip.
fn mode_chip<'a>(label: String, selected: bool, on_press: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| styles::button::chip(theme, status, selected))
        .into()
}

/// Renders one scheduled session with its booking button.
fn session_card<'a>(i18n: &'a I18n, index: usize, session: &'a Session) -> Element<'a, Message> {
    let details = Text::new(format!(
        "{} · {} · {}",
        session.date.format("%-d %B %Y"),
        i18n.tr(session.location.message_key()),
        session.price
    ))
    .size(typography::BODY);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(session.course)
                            .size(typography::TITLE_SM)
                            .color(palette::PRIMARY_400),
                    )
                    .push(details),
            )
            .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("schedule-book")))
                .on_press(Message::OpenBooking(index))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );

    Container::new(row)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Style for a calendar day cell; off-month days render dimmed.
fn day_cell_style(theme: &Theme, in_month: bool, has_event: bool) -> iced::widget::container::Style {
    let extended = theme.extended_palette();
    let mut background = extended.background.weak.color;
    if has_event {
        background = iced::Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        };
    }
    if !in_month {
        background.a *= 0.3;
    }

    iced::widget::container::Style {
        background: Some(background.into()),
        border: iced::Border {
            radius: 2.0.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}
