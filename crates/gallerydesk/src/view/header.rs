//! Gallery header with search, status and session controls.

use iced::widget::{Space, button, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::{
    form_input_style, header_style, offline_banner_style, palette, primary_button_style,
    secondary_button_style,
};

/// Renders the gallery header bar.
pub fn view_header(
    username: Option<&str>,
    search_query: &str,
    photo_count: usize,
) -> Element<'static, Message> {
    // App title with branding
    let title = row![
        text("\u{1F4F7}").size(20), // camera
        text("GalleryDesk")
            .size(20)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            })
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.primary),
                }
            }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let count = text(photo_count_label(photo_count))
        .size(12)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    // Search across title, category and notes
    let search = text_input("Search photos...", search_query)
        .width(Length::Fixed(240.0))
        .padding([8, 14])
        .style(form_input_style)
        .on_input(Message::SearchChanged);

    let signed_in = text(match username {
        Some(name) => format!("Signed in as {name}"),
        None => "Signed in".to_string(),
    })
    .size(13)
    .style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let logout = button(text("Sign out").size(13))
        .padding([8, 14])
        .style(secondary_button_style)
        .on_press(Message::Logout);

    let content = row![
        title,
        count,
        Space::new().width(Length::Fill),
        search,
        signed_in,
        logout,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding([12, 20])
        .style(header_style)
        .into()
}

/// Banner shown under the header while the backend is unreachable.
pub fn view_offline_banner() -> Element<'static, Message> {
    let notice = row![
        text("\u{26A0}").size(15), // warning sign
        text("Backend server is offline. Photo management is disabled.").size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let retry = button(
        row![text("\u{21BB}").size(13), text("Retry").size(13)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .padding([6, 14])
    .style(primary_button_style)
    .on_press(Message::RetryConnection);

    container(
        row![notice, Space::new().width(Length::Fill), retry]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([8, 20])
    .style(offline_banner_style)
    .into()
}

fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 photo".to_string()
    } else {
        format!("{count} photos")
    }
}
