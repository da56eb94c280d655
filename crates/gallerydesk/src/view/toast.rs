//! Transient notification bar.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use gallerydesk_core::{Toast, ToastStatus};

use crate::message::Message;
use crate::style::widgets;

/// Render the active toast as a bar along the bottom edge.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let style: fn(&iced::Theme) -> iced::widget::container::Style = match toast.status {
        ToastStatus::Success => widgets::toast_success_style,
        ToastStatus::Error => widgets::toast_error_style,
        ToastStatus::Info => widgets::toast_info_style,
    };

    let glyph = match toast.status {
        ToastStatus::Success => "\u{2714}", // check mark
        ToastStatus::Error => "\u{26A0}",   // warning sign
        ToastStatus::Info => "\u{2139}",    // information
    };

    let dismiss = button(text("\u{2715}").size(12)) // multiplication x
        .on_press(Message::ToastDismissed)
        .padding([4, 8])
        .style(widgets::ghost_button_style);

    container(
        row![
            text(glyph).size(14),
            text(&toast.message).size(13),
            Space::new().width(Length::Fill),
            dismiss,
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(style)
    .into()
}
