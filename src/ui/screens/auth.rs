// SPDX-License-Identifier: MPL-2.0
//! Login and signup screens.
//!
//! Both forms live in one component so the remembered email and the
//! cross-links between them stay in one place. Login accepts any
//! well-formed credentials (the backend is simulated); signup enforces the
//! password strength meter.

use super::{labeled_input, Event};
use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::submission::{FormKind, FormPayload};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::screens::home::Role;
use crate::ui::styles;
use crate::validation::{self, password, ErrorList, FieldStatus};
use iced::widget::{button, checkbox, pick_list, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Which of the two auth forms is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Login,
    Signup,
}

/// Login form state.
#[derive(Debug, Default)]
struct LoginForm {
    email: String,
    password: String,
    remember: bool,
    show_password: bool,
    email_status: FieldStatus,
    password_status: FieldStatus,
    in_flight: bool,
}

/// Signup form state.
#[derive(Debug, Default)]
struct SignupForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    role: Option<Role>,
    password: String,
    confirm: String,
    show_password: bool,
    terms: bool,
    newsletter: bool,
    first_name_status: FieldStatus,
    last_name_status: FieldStatus,
    email_status: FieldStatus,
    phone_status: FieldStatus,
    password_status: FieldStatus,
    confirm_status: FieldStatus,
    in_flight: bool,
}

/// Messages emitted by the auth screens.
#[derive(Debug, Clone)]
pub enum Message {
    LoginEmailChanged(String),
    LoginPasswordChanged(String),
    LoginRememberToggled(bool),
    LoginShowPasswordToggled,
    SubmitLogin,
    GoToSignup,
    GoToLogin,
    SignupFirstNameChanged(String),
    SignupLastNameChanged(String),
    SignupEmailChanged(String),
    SignupPhoneChanged(String),
    SignupRoleSelected(Role),
    SignupPasswordChanged(String),
    SignupConfirmChanged(String),
    SignupShowPasswordToggled,
    SignupTermsToggled(bool),
    SignupNewsletterToggled(bool),
    SubmitSignup,
}

/// Auth component state holding both forms.
#[derive(Debug, Default)]
pub struct State {
    login: LoginForm,
    signup: SignupForm,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preloads the remembered email into the login form and ticks the
    /// remember-me box.
    pub fn prefill_email(&mut self, email: &str) {
        self.login.email = email.to_string();
        self.login.remember = true;
    }

    /// Email currently entered in the login form.
    #[must_use]
    pub fn login_email(&self) -> &str {
        &self.login.email
    }

    /// Whether the login form's remember-me box is ticked.
    #[must_use]
    pub fn login_remember(&self) -> bool {
        self.login.remember
    }

    /// Marks the in-flight submission of the given kind as finished.
    pub fn submission_finished(&mut self, kind: FormKind, succeeded: bool) {
        match kind {
            FormKind::Login => {
                self.login.in_flight = false;
                if succeeded {
                    self.login.password.clear();
                    self.login.password_status = FieldStatus::Neutral;
                }
            }
            FormKind::Signup => {
                self.signup.in_flight = false;
                if succeeded {
                    self.signup = SignupForm::default();
                }
            }
            _ => {}
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LoginEmailChanged(value) => {
                self.login.email = value;
                self.login.email_status = FieldStatus::Neutral;
                Event::None
            }
            Message::LoginPasswordChanged(value) => {
                self.login.password = value;
                self.login.password_status = FieldStatus::Neutral;
                Event::None
            }
            Message::LoginRememberToggled(value) => {
                self.login.remember = value;
                Event::None
            }
            Message::LoginShowPasswordToggled => {
                self.login.show_password = !self.login.show_password;
                Event::None
            }
            Message::SubmitLogin => self.submit_login(),
            Message::GoToSignup => Event::Navigate(Screen::Signup),
            Message::GoToLogin => Event::Navigate(Screen::Login),
            Message::SignupFirstNameChanged(value) => {
                self.signup.first_name = value;
                self.signup.first_name_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupLastNameChanged(value) => {
                self.signup.last_name = value;
                self.signup.last_name_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupEmailChanged(value) => {
                self.signup.email = value;
                self.signup.email_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupPhoneChanged(value) => {
                self.signup.phone = value;
                self.signup.phone_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupRoleSelected(role) => {
                self.signup.role = Some(role);
                Event::None
            }
            Message::SignupPasswordChanged(value) => {
                self.signup.password = value;
                self.signup.password_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupConfirmChanged(value) => {
                self.signup.confirm = value;
                self.signup.confirm_status = FieldStatus::Neutral;
                Event::None
            }
            Message::SignupShowPasswordToggled => {
                self.signup.show_password = !self.signup.show_password;
                Event::None
            }
            Message::SignupTermsToggled(value) => {
                self.signup.terms = value;
                Event::None
            }
            Message::SignupNewsletterToggled(value) => {
                self.signup.newsletter = value;
                Event::None
            }
            Message::SubmitSignup => self.submit_signup(),
        }
    }

    /// Validates the login form; submits it when every check passes.
    fn submit_login(&mut self) -> Event {
        if self.login.in_flight {
            return Event::None;
        }

        let mut errors = ErrorList::new();
        self.login.email_status = errors.check(
            validation::is_valid_email(&self.login.email),
            "error-email-invalid",
        );
        self.login.password_status = errors.check(
            self.login.password.chars().count() >= 6,
            "error-password-too-short",
        );

        if !errors.is_empty() {
            return Event::Notify(Notification::error_list(&errors.into_keys()));
        }

        self.login.in_flight = true;
        let payload = FormPayload::new(FormKind::Login)
            .with_field("email", self.login.email.trim())
            .with_field("password", self.login.password.as_str());
        Event::Submit(payload)
    }

    /// Validates the signup form; submits it when every check passes.
    fn submit_signup(&mut self) -> Event {
        if self.signup.in_flight {
            return Event::None;
        }

        let mut errors = ErrorList::new();
        self.signup.first_name_status = errors.check(
            validation::has_min_len(&self.signup.first_name, 2),
            "error-first-name-too-short",
        );
        self.signup.last_name_status = errors.check(
            validation::has_min_len(&self.signup.last_name, 2),
            "error-last-name-too-short",
        );
        self.signup.email_status = errors.check(
            validation::is_valid_email(&self.signup.email),
            "error-email-invalid",
        );
        self.signup.phone_status = errors.check(
            validation::is_valid_phone(&self.signup.phone),
            "error-phone-invalid",
        );
        errors.check(self.signup.role.is_some(), "error-role-missing");
        self.signup.password_status = errors.check(
            password::strength(&self.signup.password).is_acceptable(),
            "error-password-weak",
        );
        self.signup.confirm_status = errors.check(
            !self.signup.password.is_empty() && self.signup.password == self.signup.confirm,
            "error-password-mismatch",
        );
        errors.check(self.signup.terms, "error-terms-unaccepted");

        if !errors.is_empty() {
            return Event::Notify(Notification::error_list(&errors.into_keys()));
        }

        self.signup.in_flight = true;
        let payload = FormPayload::new(FormKind::Signup)
            .with_field("first_name", self.signup.first_name.trim())
            .with_field("last_name", self.signup.last_name.trim())
            .with_field("email", self.signup.email.trim())
            .with_field("phone", self.signup.phone.trim())
            .with_field(
                "role",
                self.signup.role.map(|r| r.to_string()).unwrap_or_default(),
            )
            .with_field("password", self.signup.password.as_str())
            .with_field("newsletter", if self.signup.newsletter { "yes" } else { "" });
        Event::Submit(payload)
    }

    pub fn view<'a>(&'a self, mode: Mode, i18n: &'a I18n) -> Element<'a, Message> {
        let form = match mode {
            Mode::Login => self.login_form(i18n),
            Mode::Signup => self.signup_form(i18n),
        };

        let card = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::card);

        scrollable(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center),
        )
        .into()
    }

    fn login_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.login;

        let submit_label = if form.in_flight {
            i18n.tr("auth-signing-in")
        } else {
            i18n.tr("auth-login-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitLogin);
        }

        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(i18n.tr("auth-login-title"))
                    .size(typography::TITLE_MD)
                    .color(palette::PRIMARY_400),
            )
            .push(labeled_input(
                i18n.tr("field-email"),
                &form.email,
                form.email_status,
                false,
                Message::LoginEmailChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-password"),
                &form.password,
                form.password_status,
                !form.show_password,
                Message::LoginPasswordChanged,
            ))
            .push(
                button(Text::new(i18n.tr(show_password_key(form.show_password))).size(typography::CAPTION))
                    .on_press(Message::LoginShowPasswordToggled)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            )
            .push(
                checkbox(form.remember)
                    .label(i18n.tr("auth-remember"))
                    .on_toggle(Message::LoginRememberToggled),
            )
            .push(submit)
            .push(
                button(Text::new(i18n.tr("auth-go-signup")).size(typography::BODY))
                    .on_press(Message::GoToSignup)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            )
            .into()
    }

    fn signup_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let form = &self.signup;

        let submit_label = if form.in_flight {
            i18n.tr("auth-creating-account")
        } else {
            i18n.tr("auth-signup-submit")
        };
        let mut submit = button(Text::new(submit_label))
            .padding([spacing::XS, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::primary);
        if !form.in_flight {
            submit = submit.on_press(Message::SubmitSignup);
        }

        let strength = password::strength(&form.password);
        let strength_row: Element<'a, Message> = if form.password.is_empty() {
            Text::new("").into()
        } else {
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(i18n.tr(strength.level.message_key()))
                        .size(typography::CAPTION)
                        .color(strength_color(strength.level)),
                )
                .into()
        };

        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(i18n.tr("auth-signup-title"))
                    .size(typography::TITLE_MD)
                    .color(palette::PRIMARY_400),
            )
            .push(labeled_input(
                i18n.tr("field-first-name"),
                &form.first_name,
                form.first_name_status,
                false,
                Message::SignupFirstNameChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-last-name"),
                &form.last_name,
                form.last_name_status,
                false,
                Message::SignupLastNameChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-email"),
                &form.email,
                form.email_status,
                false,
                Message::SignupEmailChanged,
            ))
            .push(labeled_input(
                i18n.tr("field-phone"),
                &form.phone,
                form.phone_status,
                false,
                Message::SignupPhoneChanged,
            ))
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(Text::new(i18n.tr("field-role")).size(typography::BODY))
                    .push(pick_list(Role::ALL, form.role, Message::SignupRoleSelected)),
            )
            .push(labeled_input(
                i18n.tr("field-password"),
                &form.password,
                form.password_status,
                !form.show_password,
                Message::SignupPasswordChanged,
            ))
            .push(strength_row)
            .push(labeled_input(
                i18n.tr("field-confirm-password"),
                &form.confirm,
                form.confirm_status,
                !form.show_password,
                Message::SignupConfirmChanged,
            ))
            .push(
                button(Text::new(i18n.tr(show_password_key(form.show_password))).size(typography::CAPTION))
                    .on_press(Message::SignupShowPasswordToggled)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            )
            .push(
                checkbox(form.terms)
                    .label(i18n.tr("auth-terms"))
                    .on_toggle(Message::SignupTermsToggled),
            )
            .push(
                checkbox(form.newsletter)
                    .label(i18n.tr("auth-newsletter"))
                    .on_toggle(Message::SignupNewsletterToggled),
            )
            .push(submit)
            .push(
                button(Text::new(i18n.tr("auth-go-login")).size(typography::BODY))
                    .on_press(Message::GoToLogin)
                    .padding(spacing::XXS)
                    .style(styles::button::plain),
            )
            .into()
    }
}

/// The i18n key for the show/hide password toggle label.
fn show_password_key(showing: bool) -> &'static str {
    if showing {
        "auth-hide-password"
    } else {
        "auth-show-password"
    }
}

/// Meter color for a strength level.
fn strength_color(level: password::Level) -> iced::Color {
    match level {
        password::Level::Weak => palette::ERROR_500,
        password::Level::Fair => palette::WARNING_500,
        password::Level::Good => palette::INFO_500,
        password::Level::Strong => palette::SUCCESS_500,
    }
}
