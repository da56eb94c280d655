//! Sign-in view.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{LoginMessage, Message};
use crate::model::LoginForm;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the sign-in screen.
pub fn view_login(form: &LoginForm) -> Element<'_, Message> {
    let p = palette::current();

    let brand = row![
        text("\u{1F4F7}").size(26), // camera
        text("GalleryDesk")
            .size(26)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .color(p.primary),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let subtitle = text("Sign in to manage the portfolio gallery")
        .size(14)
        .color(p.text_secondary);

    let username = labeled_input(
        "Username",
        "admin",
        &form.username,
        LoginMessage::UsernameChanged,
        false,
    );

    let password = labeled_input(
        "Password",
        "",
        &form.password,
        LoginMessage::PasswordChanged,
        true,
    );

    let submit = button(
        text(if form.in_flight {
            "Signing in..."
        } else {
            "Sign in"
        })
        .size(14),
    )
    .on_press_maybe(
        form.can_submit()
            .then_some(Message::Login(LoginMessage::Submit)),
    )
    .padding([10, 20])
    .width(Length::Fill)
    .style(widgets::primary_button_style);

    let card = container(
        column![
            brand,
            subtitle,
            Space::new().height(12),
            username,
            password,
            Space::new().height(8),
            submit,
        ]
        .spacing(14)
        .padding(32)
        .max_width(380),
    )
    .style(widgets::card_style);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| {
            let p = palette::current();
            container::Style {
                background: Some(iced::Background::Color(p.background)),
                ..Default::default()
            }
        })
        .into()
}

/// Create a labeled text input. Enter submits the form.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> LoginMessage + 'a,
    secure: bool,
) -> Element<'a, Message> {
    let p = palette::current();
    column![
        text(label).size(12).color(p.text_secondary),
        text_input(placeholder, value)
            .on_input(move |s| Message::Login(on_input(s)))
            .on_submit(Message::Login(LoginMessage::Submit))
            .padding(10)
            .secure(secure)
            .style(widgets::form_input_style),
    ]
    .spacing(4)
    .into()
}
