// SPDX-License-Identifier: MPL-2.0
//! Resources screen: FAQ category tabs with a single-open accordion,
//! simulated downloads, and the promotion request modal.

use super::{labeled_input, section_title, Event};
use crate::content::{self, FaqCategory};
use crate::i18n::fluent::I18n;
use crate::submission::{FormKind, FormPayload};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::validation::{self, ErrorList, FieldStatus};
use iced::widget::{button, pick_list, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Promotion request modal form state.
#[derive(Debug)]
struct PromotionForm {
    promotion: String,
    details: String,
    name: String,
    email: String,
    phone: String,
    course: Option<&'static str>,
    name_status: FieldStatus,
    email_status: FieldStatus,
    phone_status: FieldStatus,
    in_flight: bool,
}

impl PromotionForm {
    fn new(promotion: String, details: String) -> Self {
        Self {
            promotion,
            details,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            course: None,
            name_status: FieldStatus::Neutral,
            email_status: FieldStatus::Neutral,
            phone_status: FieldStatus::Neutral,
            in_flight: false,
        }
    }
}

/// Messages emitted by the resources screen.
#[derive(Debug, Clone)]
pub enum Message {
    FaqCategorySelected(FaqCategory),
    FaqToggled(usize),
    DownloadPressed(usize),
    OpenPromotion(usize),
    ClosePromotion,
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CourseSelected(&'static str),
    SubmitPromotion,
}

/// Resources screen state.
#[derive(Debug)]
pub struct State {
    faq_category: FaqCategory,
    /// Index (within `content::faq_items()`) of the single open FAQ entry.
    open_faq: Option<usize>,
    promotion: Option<PromotionForm>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            faq_category: FaqCategory::Courses,
            open_faq: None,
            promotion: None,
        }
    }

    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.promotion.is_some()
    }

    pub fn close_modal(&mut self) {
        self.promotion = None;
    }

    /// Marks the in-flight submission as finished; success closes the modal.
    pub fn submission_finished(&mut self, succeeded: bool) {
        if succeeded {
            self.promotion = None;
        } else if let Some(form) = &mut self.promotion {
            form.in_flight = false;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FaqCategorySelected(category) => {
                if self.faq_category != category {
                    self.faq_category = category;
                    self.open_faq = None;
                }
                Event::None
            }
            Message::FaqToggled(index) => {
                // A second press on the open entry closes it
                self.open_faq = if self.open_faq == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Event::None
            }
            Message::DownloadPressed(index) => match content::downloads().get(index) {
                Some(item) => Event::Download(item.title.to_string()),
                None => Event::None,
            },
            Message::OpenPromotion(index) => {
                if let Some(promotion) = content::promotions().get(index) {
                    self.promotion = Some(PromotionForm::new(
                        promotion.name.to_string(),
                        promotion.details.to_string(),
                    ));
                }
                Event::None
            }
            Message::ClosePromotion => {
                self.close_modal();
                Event::None
            }
            Message::NameChanged(value) => {
                if let Some(form) = &mut self.promotion {
                    form.name = value;
                    form.name_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::EmailChanged(value) => {
                if let Some(form) = &mut self.promotion {
                    form.email = value;
                    form.email_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::PhoneChanged(value) => {
                if let Some(form) = &mut self.promotion {
                    form.phone = value;
                    form.phone_status = FieldStatus::Neutral;
                }
                Event::None
            }
            Message::CourseSelected(course) => {
                if let Some(form) = &mut self.promotion {
                    form.course = Some(course);
                }
                Event::None
            }
            Message::SubmitPromotion => self.submit_promotion(),
        }
    }

    /// Validates the promotion form; submits it when every check passes.
    fn submit_promotion(&mut self) -> Event {
        let Some(form) = &mut self.promotion else {
            return Event::None;
        };
        if form.in_flight {
            return Event::None;
        }

        let mut errors = ErrorList::new();
        form.name_status = errors.check(
            validation::has_min_len(&form.name, 2),
            "error-name-too-short",
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
        let payload = FormPayload::new(FormKind::Promotion)
            .with_field("promotion", form.promotion.as_str())
            .with_field("name", form.name.trim())
            .with_field("email", form.email.trim())
            .with_field("phone", form.phone.trim())
            .with_field("course", form.course.unwrap_or_default());
        Event::Submit(payload)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let body = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(section_title(i18n.tr("resources-downloads-title")))
            .push(self.downloads(i18n))
            .push(section_title(i18n.tr("resources-promotions-title")))
            .push(self.promotions(i18n))
            .push(section_title(i18n.tr("resources-faq-title")))
            .push(self.faq(i18n));

        let base: Element<'a, Message> = scrollable(body).into();

        match &self.promotion {
            Some(form) => Stack::new()
                .push(base)
                .push(self.promotion_modal(i18n, form))
                .into(),
            None => base,
        }
    }

    fn downloads<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut list = Column::new().spacing(spacing::XS);
        for (index, item) in content::downloads().iter().enumerate() {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Container::new(
                        Column::new()
                            .push(Text::new(item.title).size(typography::BODY_LG))
                            .push(Text::new(item.file_size).size(typography::CAPTION)),
                    )
                    .width(Length::Fill),
                )
                .push(
                    button(
                        Row::new()
                            .spacing(spacing::XXS)
                            .align_y(alignment::Vertical::Center)
                            .push(icons::sized(icons::download(), sizing::ICON_SM))
                            .push(Text::new(i18n.tr("resources-download"))),
                    )
                    .on_press(Message::DownloadPressed(index))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::primary),
                );
            list = list.push(
                Container::new(row)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::card),
            );
        }
        list.into()
    }

    fn promotions<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut list = Column::new().spacing(spacing::XS);
        for (index, promotion) in content::promotions().iter().enumerate() {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    Container::new(
                        Text::new(promotion.name)
                            .size(typography::BODY_LG)
                            .color(palette::PRIMARY_400),
                    )
                    .width(Length::Fill),
                )
                .push(
                    button(Text::new(i18n.tr("resources-claim")))
                        .on_press(Message::OpenPromotion(index))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::primary),
                );
            list = list.push(
                Container::new(row)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::card),
            );
        }
        list.into()
    }

    fn faq<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut tabs = Row::new().spacing(spacing::XS);
        for category in FaqCategory::ALL {
            let selected = category == self.faq_category;
            tabs = tabs.push(
                button(Text::new(i18n.tr(category.message_key())).size(typography::BODY))
                    .on_press(Message::FaqCategorySelected(category))
                    .padding([spacing::XXS, spacing::SM])
                    .style(move |theme: &Theme, status| {
                        styles::button::chip(theme, status, selected)
                    }),
            );
        }

        let mut items = Column::new().spacing(spacing::XS);
        for (index, item) in content::faq_items().iter().enumerate() {
            if item.category != self.faq_category {
                continue;
            }
            let open = self.open_faq == Some(index);
            let mut entry = Column::new().spacing(spacing::XXS).push(
                button(Text::new(item.question).size(typography::BODY_LG))
                    .on_press(Message::FaqToggled(index))
                    .padding([spacing::XXS, spacing::XS])
                    .width(Length::Fill)
                    .style(styles::button::plain),
            );
            if open {
                entry = entry.push(
                    Container::new(Text::new(item.answer).size(typography::BODY))
                        .padding([spacing::XXS, spacing::XS]),
                );
            }
            items = items.push(
                Container::new(entry)
                    .width(Length::Fill)
                    .style(styles::container::card),
            );
        }

        Column::new()
            .spacing(spacing::SM)
            .push(tabs)
            .push(items)
            .into()
    }

    fn promotion_modal<'a>(
        &'a self,
        i18n: &'a I18n,
        form: &'a PromotionForm,
    ) -> Element<'a, Message> {
        let submit_label = if form.in_flight {
            i18n.tr("form-submitting")
        } else {
            i18n.tr("promotion-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitPromotion);
        }

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(form.promotion.as_str())
                        .size(typography::TITLE_SM)
                        .color(palette::PRIMARY_400),
                )
                .width(Length::Fill),
            )
            .push(
                button(Text::new("✕"))
                    .on_press(Message::ClosePromotion)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            );

        let course_titles: Vec<&'static str> =
            content::courses().iter().map(|c| c.title).collect();

        let fields = Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(Text::new(form.details.as_str()).size(typography::BODY))
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
                    .push(Text::new(i18n.tr("field-course")).size(typography::BODY))
                    .push(pick_list(
                        course_titles,
                        form.course,
                        Message::CourseSelected,
                    )),
            )
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

#[cfg(test)]
mod tests {
    use super::*;

    fn first_index_in(category: FaqCategory) -> usize {
        content::faq_items()
            .iter()
            .position(|f| f.category == category)
            .expect("category should have items")
    }

    #[test]
    fn faq_toggle_opens_and_closes() {
        let mut state = State::new();
        let index = first_index_in(FaqCategory::Courses);

        state.update(Message::FaqToggled(index));
        assert_eq!(state.open_faq, Some(index));

        state.update(Message::FaqToggled(index));
        assert_eq!(state.open_faq, None);
    }

    #[test]
    fn opening_another_faq_closes_the_first() {
        let mut state = State::new();
        let first = first_index_in(FaqCategory::Courses);
        let second = first + 1;

        state.update(Message::FaqToggled(first));
        state.update(Message::FaqToggled(second));
        assert_eq!(state.open_faq, Some(second));
    }

    #[test]
    fn switching_category_closes_open_entry() {
        let mut state = State::new();
        state.update(Message::FaqToggled(first_index_in(FaqCategory::Courses)));

        state.update(Message::FaqCategorySelected(FaqCategory::Payments));
        assert_eq!(state.open_faq, None);
        assert_eq!(state.faq_category, FaqCategory::Payments);
    }

    #[test]
    fn download_press_escalates_a_download_event() {
        let mut state = State::new();
        match state.update(Message::DownloadPressed(0)) {
            Event::Download(title) => {
                assert_eq!(title, content::downloads()[0].title);
            }
            other => panic!("expected Download, got {:?}", other),
        }
    }

    #[test]
    fn invalid_promotion_form_collects_errors() {
        let mut state = State::new();
        state.update(Message::OpenPromotion(0));

        match state.update(Message::SubmitPromotion) {
            Event::Notify(notification) => assert_eq!(notification.lines().len(), 3),
            other => panic!("expected Notify, got {:?}", other),
        }
    }

    #[test]
    fn valid_promotion_form_submits_payload() {
        let mut state = State::new();
        state.update(Message::OpenPromotion(1));
        state.update(Message::NameChanged("Zanele Khumalo".into()));
        state.update(Message::EmailChanged("zanele@example.com".into()));
        state.update(Message::PhoneChanged("0715550123".into()));

        match state.update(Message::SubmitPromotion) {
            Event::Submit(payload) => {
                assert_eq!(payload.kind(), FormKind::Promotion);
                assert_eq!(
                    payload.field("promotion"),
                    Some(content::promotions()[1].name)
                );
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn successful_submission_closes_the_modal() {
        let mut state = State::new();
        state.update(Message::OpenPromotion(0));
        state.submission_finished(true);
        assert!(!state.has_modal());
    }

    #[test]
    fn view_renders_with_and_without_modal() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _ = state.view(&i18n);
        state.update(Message::OpenPromotion(0));
        let _ = state.view(&i18n);
    }
}
